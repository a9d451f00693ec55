//! Reqwest-backed REST adapters.
//!
//! [`ApiClient`] owns transport details (base URL, versioned prefix, JSON
//! encoding and error mapping). [`ResourceClient`] turns a [`RestResource`]
//! description into the four CRUD calls, and [`HttpAddressService`] binds
//! that to the address port.

mod address;
mod api_client;
mod resource;

pub use address::{AddressResource, HttpAddressService};
pub use api_client::{API_PREFIX, ApiClient, ApiClientError};
pub use resource::{ResourceClient, RestResource};
