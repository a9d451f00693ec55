//! Domain primitives and ports.
//!
//! Purpose: strongly typed records exchanged with the API and the ports the
//! UI layer depends on. Nothing in here knows about HTTP.
//!
//! Public surface:
//! - [`Address`], [`AddressDraft`], [`AddressId`], [`UserId`]: the address
//!   resource.
//! - [`DateTimeLocale`]: timestamp formatting per locale.
//! - [`Verbatim`]: a decoded payload that re-serialises to the server's text.
//! - [`ports`]: `AddressService` and `RemoteCallError`.

pub mod address;
pub mod locale;
pub mod ports;
pub mod verbatim;

pub use self::address::{Address, AddressDraft, AddressId, UserId, UserIdValidationError};
pub use self::locale::{DateTimeLocale, UnsupportedLocale};
pub use self::verbatim::Verbatim;
