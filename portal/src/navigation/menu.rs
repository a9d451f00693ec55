//! Static navigation menu for the admin app.

use serde::Serialize;

use super::IconIdentifier;

/// One navigation entry.
///
/// `key` is the stable handle used for selection and highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub title: &'static str,
    pub key: &'static str,
    pub path: &'static str,
    pub icon: IconIdentifier,
}

impl MenuEntry {
    const fn new(
        title: &'static str,
        key: &'static str,
        path: &'static str,
        icon: &'static str,
    ) -> Self {
        Self {
            title,
            key,
            path,
            icon: IconIdentifier::from_static(icon),
        }
    }

    /// Whether `path` is this entry's route or nested beneath it.
    pub fn matches(&self, path: &str) -> bool {
        let route = self.path.trim_end_matches('/');
        let path = path.trim_end_matches('/');
        path == route
            || path
                .strip_prefix(route)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

static ADMIN_MENU: [MenuEntry; 3] = [
    MenuEntry::new("Dashboard", "dashboard", "/admin", "icon:dashboard"),
    MenuEntry::new("Settings", "settings", "/admin/settings", "icon:settings"),
    MenuEntry::new("Profile", "profile", "/admin/profile", "icon:user"),
];

/// The admin navigation entries, in display order.
pub fn admin_menu() -> &'static [MenuEntry] {
    &ADMIN_MENU
}

/// Entry to highlight for `path`: the one with the longest matching route.
pub fn select_for_path<'a>(menu: &'a [MenuEntry], path: &str) -> Option<&'a MenuEntry> {
    menu.iter()
        .filter(|entry| entry.matches(path))
        .max_by_key(|entry| entry.path.len())
}
