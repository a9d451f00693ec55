//! Domain ports: the traits adapters implement and the errors they return.

mod macros;
pub(crate) use macros::define_port_error;

mod address_service;
mod remote_call;

#[cfg(test)]
pub use address_service::MockAddressService;
pub use address_service::{AddressService, FixtureAddressService};
pub use remote_call::RemoteCallError;
