//! Driven port for the address resource.
//!
//! The UI layer talks to addresses only through this trait, so pages can be
//! composed against the HTTP adapter, a fixture, or a mock.

use async_trait::async_trait;
use pagination::{PageMeta, Paginated};

use super::RemoteCallError;
use crate::domain::{Address, AddressDraft, AddressId, UserId, Verbatim};

/// Port exposing the four address operations.
///
/// Each call maps to exactly one remote request. Failures are returned
/// unmodified; nothing is cached between calls. Returned payloads are
/// [`Verbatim`], so callers can forward the server's JSON untouched.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressService: Send + Sync {
    /// Fetch the server's default page of addresses owned by `user_id`.
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Verbatim<Paginated<Address>>, RemoteCallError>;

    /// Create an address from a partial record and return the stored record.
    async fn create(&self, draft: &AddressDraft) -> Result<Verbatim<Address>, RemoteCallError>;

    /// Apply a partial record to `id` and return the updated record.
    async fn update(
        &self,
        id: AddressId,
        draft: &AddressDraft,
    ) -> Result<Verbatim<Address>, RemoteCallError>;

    /// Delete `id`.
    async fn delete(&self, id: AddressId) -> Result<(), RemoteCallError>;
}

/// Offline implementation: lists nothing and refuses writes.
///
/// Used when no API is reachable, for example when rendering the user app
/// from the CLI with `--offline`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAddressService;

#[async_trait]
impl AddressService for FixtureAddressService {
    async fn list_for_user(
        &self,
        _user_id: &UserId,
    ) -> Result<Verbatim<Paginated<Address>>, RemoteCallError> {
        Verbatim::encode(Paginated::new(Vec::new(), PageMeta::new(0, 1, 0, 0)))
            .map_err(|error| RemoteCallError::decode(error.to_string()))
    }

    async fn create(&self, _draft: &AddressDraft) -> Result<Verbatim<Address>, RemoteCallError> {
        Err(RemoteCallError::transport("offline fixture accepts no writes"))
    }

    async fn update(
        &self,
        _id: AddressId,
        _draft: &AddressDraft,
    ) -> Result<Verbatim<Address>, RemoteCallError> {
        Err(RemoteCallError::transport("offline fixture accepts no writes"))
    }

    async fn delete(&self, _id: AddressId) -> Result<(), RemoteCallError> {
        Err(RemoteCallError::transport("offline fixture accepts no writes"))
    }
}
