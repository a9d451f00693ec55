//! Client portal for the address REST API.
//!
//! The crate is laid out as ports and adapters:
//!
//! - [`domain`] holds the address model, the [`AddressService`] port and the
//!   date/time locale;
//! - [`outbound`] implements the port over HTTP with `reqwest`;
//! - [`navigation`] and [`ui`] describe the admin menu and compose pages;
//! - [`context`] injects services and locale into page builders.
//!
//! [`AddressService`]: domain::ports::AddressService

pub mod context;
pub mod domain;
pub mod navigation;
pub mod outbound;
pub mod settings;
pub mod telemetry;
pub mod ui;
