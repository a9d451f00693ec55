//! Page composition: a view tree, a layout shell and the pages built on them.
//!
//! Pages hold no business logic. They read what they need from an
//! [`AppContext`](crate::context::AppContext) and return a [`View`].

pub mod layout;
pub mod pages;
pub mod view;

pub use layout::LayoutShell;
pub use view::{NavItem, View};
