//! Shared REST transport: base URL, versioned prefix, JSON and error mapping.
//!
//! Every call is one request and one response. Failures are mapped into
//! [`RemoteCallError`] and returned as-is; there is no retry, caching or
//! request validation at this layer.

use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::ports::RemoteCallError;

/// Versioned prefix every endpoint lives under.
pub const API_PREFIX: &str = "/api/v1";

/// Errors raised while constructing an [`ApiClient`].
#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    /// The base URL cannot have path segments appended (for example `data:`).
    #[error("base URL '{url}' cannot carry path segments")]
    CannotBeABase { url: String },
    /// The underlying reqwest client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

/// Cheaply clonable handle to the REST API.
///
/// Clones share one connection pool, so concurrent calls from different
/// tasks need no coordination.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client rooted at `base_url`.
    ///
    /// `timeout` bounds each whole request; `None` keeps reqwest's default,
    /// which never times out.
    ///
    /// ```rust,ignore
    /// let api = ApiClient::new(Url::parse("http://localhost:8080")?, None)?;
    /// assert_eq!(api.endpoint(&["addresses"]).path(), "/api/v1/addresses");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::CannotBeABase`] for opaque URLs and
    /// [`ApiClientError::Build`] when reqwest cannot construct its client.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, ApiClientError> {
        if base_url.cannot_be_a_base() {
            return Err(ApiClientError::CannotBeABase {
                url: base_url.to_string(),
            });
        }
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// Base URL the client was built with.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for `segments` under [`API_PREFIX`].
    ///
    /// Segments are percent-encoded individually, so identifiers containing
    /// `/` or spaces stay within one path segment. Any query or fragment on
    /// the base URL is dropped.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        // The base was checked in `new`, so segments can always be appended.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(API_PREFIX.split('/').filter(|segment| !segment.is_empty()))
                .extend(segments);
        }
        url
    }

    /// GET `url` and decode the JSON body.
    pub(crate) async fn get_json<T>(&self, url: Url) -> Result<T, RemoteCallError>
    where
        T: DeserializeOwned,
    {
        let request = self.client.get(url.clone());
        let body = self.execute(request, &Method::GET, &url).await?;
        decode(&body)
    }

    /// Send `body` as JSON with `method` and decode the JSON response.
    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> Result<T, RemoteCallError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.request(method.clone(), url.clone()).json(body);
        let response = self.execute(request, &method, &url).await?;
        decode(&response)
    }

    /// DELETE `url`, discarding any response body.
    pub(crate) async fn delete(&self, url: Url) -> Result<(), RemoteCallError> {
        let request = self.client.delete(url.clone());
        self.execute(request, &Method::DELETE, &url).await?;
        Ok(())
    }

    async fn execute(
        &self,
        request: RequestBuilder,
        method: &Method,
        url: &Url,
    ) -> Result<Vec<u8>, RemoteCallError> {
        debug!(%method, %url, "sending API request");
        let response = request
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|error| log_failure(method, url, map_transport_error(&error)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|error| log_failure(method, url, map_transport_error(&error)))?;
        debug!(
            %method,
            %url,
            status = status.as_u16(),
            bytes = body.len(),
            "received API response"
        );

        if !status.is_success() {
            return Err(log_failure(method, url, map_status_error(status, &body)));
        }
        Ok(body.to_vec())
    }
}

fn log_failure(method: &Method, url: &Url, error: RemoteCallError) -> RemoteCallError {
    warn!(
        %method,
        %url,
        kind = error.kind(),
        status = error.status(),
        error = %error,
        "API request failed"
    );
    error
}

fn decode<T>(body: &[u8]) -> Result<T, RemoteCallError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(body).map_err(|error| {
        RemoteCallError::decode(format!("invalid JSON payload: {error}"))
    })
}

fn map_transport_error(error: &reqwest::Error) -> RemoteCallError {
    RemoteCallError::transport(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> RemoteCallError {
    let preview = body_preview(body);
    let message = if !preview.is_empty() {
        preview
    } else if let Some(reason) = status.canonical_reason() {
        reason.to_owned()
    } else {
        format!("status {}", status.as_u16())
    };
    RemoteCallError::rejected(status.as_u16(), message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Coverage for URL building and response mapping without a network.

    use super::*;
    use rstest::rstest;

    fn api(base: &str) -> ApiClient {
        ApiClient::new(Url::parse(base).expect("valid base"), None).expect("client builds")
    }

    #[rstest]
    #[case::bare_host("http://localhost:8080", "/api/v1/addresses")]
    #[case::trailing_slash("http://localhost:8080/", "/api/v1/addresses")]
    #[case::gateway_prefix("https://example.test/gateway/", "/gateway/api/v1/addresses")]
    #[case::query_is_dropped("http://localhost:8080/?debug=1#top", "/api/v1/addresses")]
    fn endpoint_appends_versioned_prefix(#[case] base: &str, #[case] expected_path: &str) {
        let url = api(base).endpoint(&["addresses"]);
        assert_eq!(url.path(), expected_path);
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[rstest]
    fn endpoint_encodes_each_segment() {
        let url = api("http://localhost:8080").endpoint(&["users", "a/b c", "addresses"]);
        assert_eq!(url.path(), "/api/v1/users/a%2Fb%20c/addresses");
    }

    #[rstest]
    fn rejects_opaque_base_urls() {
        let base = Url::parse("data:text/plain,portal").expect("valid data url");
        let err = ApiClient::new(base, None).expect_err("opaque base must fail");
        assert!(matches!(err, ApiClientError::CannotBeABase { .. }));
    }

    #[rstest]
    #[case::json_body(StatusCode::UNPROCESSABLE_ENTITY, b"{ \"message\":  \"city required\" }".as_slice(), "{ \"message\": \"city required\" }")]
    #[case::empty_body(StatusCode::NOT_FOUND, b"".as_slice(), "Not Found")]
    #[case::server_error(StatusCode::INTERNAL_SERVER_ERROR, b"boom".as_slice(), "boom")]
    fn maps_statuses_to_rejections(
        #[case] status: StatusCode,
        #[case] body: &[u8],
        #[case] message: &str,
    ) {
        let error = map_status_error(status, body);
        assert_eq!(error, RemoteCallError::rejected(status.as_u16(), message));
    }

    #[rstest]
    fn truncates_long_bodies() {
        let body = "x".repeat(400);
        let preview = body_preview(body.as_bytes());
        assert_eq!(preview.chars().count(), 163);
        assert!(preview.ends_with("..."));
    }

    #[rstest]
    fn decode_failures_map_to_decode_errors() {
        let error = decode::<serde_json::Value>(b"not json").expect_err("decode must fail");
        assert_eq!(error.kind(), "decode");
        assert!(error.message().starts_with("invalid JSON payload"));
    }
}
