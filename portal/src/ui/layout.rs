//! Layout shell shared by every page: title, navigation, content.

use super::view::{NavItem, View};
use crate::navigation::{MenuEntry, admin_menu, select_for_path};

/// Frame composed around page content.
#[derive(Debug, Clone, Copy)]
pub struct LayoutShell {
    title: &'static str,
    menu: &'static [MenuEntry],
}

impl LayoutShell {
    /// Shell with a title and a navigation menu.
    pub const fn new(title: &'static str, menu: &'static [MenuEntry]) -> Self {
        Self { title, menu }
    }

    /// Shell of the admin dashboard.
    pub fn admin() -> Self {
        Self::new("Admin", admin_menu())
    }

    /// Shell of the user-facing app, which has no side menu.
    pub const fn account() -> Self {
        Self::new("My account", &[])
    }

    /// Compose `content` inside the shell, highlighting the entry for `path`.
    pub fn compose(&self, path: &str, content: View) -> View {
        let selected = select_for_path(self.menu, path).map(|entry| entry.key);
        let nav = self
            .menu
            .iter()
            .map(|entry| NavItem {
                title: entry.title.to_owned(),
                path: entry.path.to_owned(),
                icon: entry.icon.to_string(),
                selected: selected == Some(entry.key),
            })
            .collect::<Vec<_>>();

        let mut children = vec![View::Heading(self.title.to_owned())];
        if !nav.is_empty() {
            children.push(View::Nav(nav));
        }
        children.push(content);
        View::Stack(children)
    }
}
