//! HTTP implementation of the [`AddressService`] port.

use async_trait::async_trait;
use pagination::Paginated;

use super::{ApiClient, ResourceClient, RestResource};
use crate::domain::ports::{AddressService, RemoteCallError};
use crate::domain::{Address, AddressDraft, AddressId, UserId, Verbatim};

/// REST mapping for addresses: `/users/{userId}/addresses` and `/addresses/{id}`.
#[derive(Debug, Clone, Copy)]
pub struct AddressResource;

impl RestResource for AddressResource {
    const COLLECTION: &'static str = "addresses";
    const OWNER_COLLECTION: &'static str = "users";

    type Record = Address;
    type Draft = AddressDraft;
    type Id = AddressId;
    type OwnerId = UserId;
}

/// Address service backed by the REST API.
#[derive(Debug, Clone)]
pub struct HttpAddressService {
    client: ResourceClient<AddressResource>,
}

impl HttpAddressService {
    /// Build the service over a shared API client.
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: ResourceClient::new(api),
        }
    }

    /// Underlying resource client, for callers needing endpoint URLs.
    pub fn resource(&self) -> &ResourceClient<AddressResource> {
        &self.client
    }
}

#[async_trait]
impl AddressService for HttpAddressService {
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Verbatim<Paginated<Address>>, RemoteCallError> {
        self.client.list_for_owner(user_id).await
    }

    async fn create(&self, draft: &AddressDraft) -> Result<Verbatim<Address>, RemoteCallError> {
        self.client.create(draft).await
    }

    async fn update(
        &self,
        id: AddressId,
        draft: &AddressDraft,
    ) -> Result<Verbatim<Address>, RemoteCallError> {
        self.client.update(&id, draft).await
    }

    async fn delete(&self, id: AddressId) -> Result<(), RemoteCallError> {
        self.client.delete(&id).await
    }
}
