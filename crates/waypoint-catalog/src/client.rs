//! HTTP client for the catalog API

use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::FetchError;
use crate::resource::{Page, Resource};
use crate::Result;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches catalog resources and reports every failure as a [`FetchError`].
#[derive(Clone, Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, api_key, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
            language: DEFAULT_LANGUAGE.to_string(),
        })
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one resource and decode it as `T`
    pub async fn fetch<T: DeserializeOwned>(&self, resource: Resource) -> Result<T> {
        let url = resource.url(&self.base_url, &self.api_key, &self.language)?;
        tracing::debug!(path = %resource.path(), page = ?resource.page(), "Catalog request");

        let response = self
            .http
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(path = %resource.path(), status = status.as_u16(), "Catalog request failed");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(FetchError::EmptyBody);
        }

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// Fetch a paged list resource
    pub async fn fetch_page<T: DeserializeOwned>(&self, resource: Resource) -> Result<Page<T>> {
        self.fetch(resource).await
    }
}
