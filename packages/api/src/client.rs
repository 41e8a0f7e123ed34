//! # HTTP plumbing shared by every resource module
//!
//! [`ApiClient`] is cheap to clone (the inner `reqwest::Client` is reference
//! counted) and is handed to the UI through a Dioxus context. The resource
//! modules ([`crate::categorias`], [`crate::usuarios`], …) add one method
//! per endpoint on top of the helpers defined here:
//!
//! - [`get_json`](ApiClient::get_json) / [`get_bytes`](ApiClient::get_bytes)
//! - [`get_page`](ApiClient::get_page): JSON array body + `x-*` headers
//! - [`post_json`](ApiClient::post_json) / [`put_json`](ApiClient::put_json)
//! - [`delete`](ApiClient::delete)
//!
//! Every helper funnels the response through [`ApiClient::check`], which
//! turns non-2xx statuses into [`ApiError::Status`] carrying whatever message
//! the server put in the body.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::{server_message, ApiError};
use crate::pagination::PaginationResult;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(Client::new(), &config.base_url)
    }

    /// Build on top of an existing `reqwest::Client`.
    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of `path` under the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.http.get(self.url(path))).await?;
        Ok(response.json().await?)
    }

    /// GET a paginated collection. `query` is appended as-is.
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<PaginationResult<T>, ApiError> {
        let response = self
            .send(self.http.get(self.url(path)).query(query))
            .await?;
        let headers = response.headers().clone();
        let items: Vec<T> = response.json().await?;
        PaginationResult::from_parts(items, &headers)
    }

    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let response = self.send(self.http.get(self.url(path))).await?;
        Ok(response.bytes().await?.to_vec())
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        Ok(response.json().await?)
    }

    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(self.http.put(self.url(path)).json(body)).await?;
        Ok(response.json().await?)
    }

    /// DELETE; the response body, if any, is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.http.delete(self.url(path))).await?;
        Ok(())
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        tracing::debug!(
            "{} {}",
            response.status().as_u16(),
            response.url().path()
        );
        Self::check(response).await
    }

    /// Pass 2xx responses through; convert the rest into [`ApiError::Status`].
    async fn check(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // A body that cannot be read simply means no server message.
        let body = response.text().await.unwrap_or_default();
        let message = server_message(&body);
        tracing::warn!("API error {}: {:?}", status.as_u16(), message);
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

/// Standard `pageNumber` / `pageSize` query pair, plus an optional search
/// parameter placed first.
pub(crate) fn page_query<'a>(
    search: Option<(&'a str, &str)>,
    page_number: u32,
    page_size: u32,
) -> Vec<(&'a str, String)> {
    let mut query = Vec::with_capacity(3);
    if let Some((name, value)) = search {
        query.push((name, value.to_string()));
    }
    query.push(("pageNumber", page_number.to_string()));
    query.push(("pageSize", page_size.to_string()));
    query
}

/// Encode an identifier for use as a single path segment.
pub(crate) fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}
