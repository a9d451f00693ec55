//! Generic CRUD client for one REST resource.

use std::fmt;
use std::marker::PhantomData;

use pagination::Paginated;
use reqwest::{Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use super::ApiClient;
use crate::domain::Verbatim;
use crate::domain::ports::RemoteCallError;

/// Describes how one domain resource maps onto REST endpoints.
///
/// With `COLLECTION = "addresses"` and `OWNER_COLLECTION = "users"` the
/// client talks to:
///
/// | Call | Method | Path |
/// |---|---|---|
/// | list for owner | GET | `/api/v1/users/{owner}/addresses` |
/// | create | POST | `/api/v1/addresses` |
/// | update | PUT | `/api/v1/addresses/{id}` |
/// | delete | DELETE | `/api/v1/addresses/{id}` |
pub trait RestResource: Send + Sync + 'static {
    /// Path segment naming the resource collection.
    const COLLECTION: &'static str;
    /// Path segment naming the collection of owners.
    const OWNER_COLLECTION: &'static str;

    /// Record returned by the server.
    type Record: DeserializeOwned + Send;
    /// Partial record sent on create and update.
    type Draft: Serialize + Sync;
    /// Server-assigned record identifier.
    type Id: fmt::Display + Sync;
    /// Identifier of the owning entity.
    type OwnerId: AsRef<str> + Sync;
}

/// CRUD client for the resource described by `R`.
pub struct ResourceClient<R> {
    api: ApiClient,
    resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            resource: PhantomData,
        }
    }
}

impl<R> fmt::Debug for ResourceClient<R>
where
    R: RestResource,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("collection", &R::COLLECTION)
            .field("base_url", &self.api.base_url().as_str())
            .finish()
    }
}

impl<R> ResourceClient<R>
where
    R: RestResource,
{
    /// Bind the resource to a shared API client.
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            resource: PhantomData,
        }
    }

    /// `/api/v1/{collection}`.
    pub fn collection_url(&self) -> Url {
        self.api.endpoint(&[R::COLLECTION])
    }

    /// `/api/v1/{collection}/{id}`.
    pub fn member_url(&self, id: &R::Id) -> Url {
        let id = id.to_string();
        self.api.endpoint(&[R::COLLECTION, id.as_str()])
    }

    /// `/api/v1/{owner_collection}/{owner}/{collection}`.
    pub fn owned_collection_url(&self, owner: &R::OwnerId) -> Url {
        self.api
            .endpoint(&[R::OWNER_COLLECTION, owner.as_ref(), R::COLLECTION])
    }

    /// Fetch the server's default page of records belonging to `owner`.
    ///
    /// No paging parameters are sent; the server decides page and size.
    /// Metadata whose page count disagrees with `total` and `pageSize` is
    /// logged and passed on unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteCallError`] when the call fails or the body is not a
    /// pagination envelope of records.
    pub async fn list_for_owner(
        &self,
        owner: &R::OwnerId,
    ) -> Result<Verbatim<Paginated<R::Record>>, RemoteCallError> {
        let url = self.owned_collection_url(owner);
        let page: Verbatim<Paginated<R::Record>> = self.api.get_json(url.clone()).await?;
        let meta = page.get().meta();
        if !meta.is_consistent() {
            warn!(
                url = %url,
                total = meta.total,
                page_size = meta.page_size,
                total_pages = meta.total_pages,
                expected_total_pages = meta.expected_total_pages(),
                "page metadata is inconsistent"
            );
        }
        Ok(page)
    }

    /// Create a record from `draft`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteCallError`] when the call fails or the body is not a
    /// record.
    pub async fn create(&self, draft: &R::Draft) -> Result<Verbatim<R::Record>, RemoteCallError> {
        self.api
            .send_json(Method::POST, self.collection_url(), draft)
            .await
    }

    /// Apply `draft` to the record `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteCallError`] when the call fails or the body is not a
    /// record.
    pub async fn update(
        &self,
        id: &R::Id,
        draft: &R::Draft,
    ) -> Result<Verbatim<R::Record>, RemoteCallError> {
        self.api
            .send_json(Method::PUT, self.member_url(id), draft)
            .await
    }

    /// Delete the record `id`. Any response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteCallError`] when the call fails.
    pub async fn delete(&self, id: &R::Id) -> Result<(), RemoteCallError> {
        self.api.delete(self.member_url(id)).await
    }
}
