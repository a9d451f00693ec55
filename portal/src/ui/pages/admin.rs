//! Admin dashboard pages. Static trees; no data is fetched.

use std::fmt;
use std::str::FromStr;

use crate::context::AppContext;
use crate::navigation::{admin_menu, select_for_path};
use crate::ui::layout::LayoutShell;
use crate::ui::view::View;

/// Pages reachable from the admin menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminPage {
    Dashboard,
    Settings,
    Profile,
}

/// Error returned when a page name is unknown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown admin page '{name}'; expected dashboard, settings or profile")]
pub struct UnknownAdminPage {
    name: String,
}

impl AdminPage {
    /// Every admin page, in menu order.
    pub const ALL: [Self; 3] = [Self::Dashboard, Self::Settings, Self::Profile];

    /// Menu key of this page.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Settings => "settings",
            Self::Profile => "profile",
        }
    }

    /// Route of this page.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/admin",
            Self::Settings => "/admin/settings",
            Self::Profile => "/admin/profile",
        }
    }

    /// Page whose menu entry is highlighted for `path`.
    pub fn from_path(path: &str) -> Option<Self> {
        let entry = select_for_path(admin_menu(), path)?;
        Self::ALL.into_iter().find(|page| page.key() == entry.key)
    }

    fn content(self, context: &AppContext) -> View {
        match self {
            Self::Dashboard => View::section(
                "Dashboard",
                vec![
                    View::text("Welcome to the admin dashboard."),
                    View::List(
                        admin_menu()
                            .iter()
                            .filter(|entry| entry.key != self.key())
                            .map(|entry| View::link(entry.title, entry.path))
                            .collect(),
                    ),
                ],
            ),
            Self::Settings => View::section(
                "Settings",
                vec![View::List(vec![View::text(format!(
                    "Locale: {}",
                    context.locale()
                ))])],
            ),
            Self::Profile => View::section(
                "Profile",
                vec![View::text("Signed in as administrator.")],
            ),
        }
    }

    /// Compose this page inside the admin layout.
    pub fn render(self, context: &AppContext) -> View {
        LayoutShell::admin().compose(self.path(), self.content(context))
    }
}

impl fmt::Display for AdminPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for AdminPage {
    type Err = UnknownAdminPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownAdminPage { name: s.to_owned() })
    }
}
