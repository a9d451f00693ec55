//! Navigation configuration: icon identifiers and the static admin menu.

mod icon;
mod menu;

pub use icon::{IconIdentifier, IconIdentifierValidationError};
pub use menu::{MenuEntry, admin_menu, select_for_path};
