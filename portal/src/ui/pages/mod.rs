//! Pages of the admin dashboard and the user-facing app.

mod address_book;
mod admin;

pub use address_book::{ADDRESS_BOOK_PATH, address_book, address_section};
pub use admin::{AdminPage, UnknownAdminPage};
