//! Application configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use waypoint_catalog::{CatalogClient, DEFAULT_BASE_URL, DEFAULT_LANGUAGE};
use waypoint_tabs::Tab;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog API root, without trailing path
    pub catalog_base_url: String,
    /// Catalog API key, sent with every request
    pub catalog_api_key: String,
    /// Response language for catalog requests
    pub language: String,
    /// How long a toast stays visible
    pub toast_duration_ms: u64,
    /// Scheme used when building deep links
    pub deep_link_scheme: String,
    /// Tab selected at startup
    pub initial_tab: Tab,
}

impl Config {
    pub fn new() -> Self {
        Self {
            catalog_base_url: DEFAULT_BASE_URL.to_string(),
            catalog_api_key: String::new(),
            language: DEFAULT_LANGUAGE.to_string(),
            toast_duration_ms: 3000,
            deep_link_scheme: "waypoint".to_string(),
            initial_tab: Tab::Home,
        }
    }

    /// Defaults overlaid with `WAYPOINT_CATALOG_URL`, `TMDB_API_KEY` and
    /// `WAYPOINT_LANGUAGE` when set
    pub fn from_env() -> Self {
        let mut config = Self::new();

        if let Ok(url) = std::env::var("WAYPOINT_CATALOG_URL") {
            config.catalog_base_url = url;
        }
        if let Ok(key) = std::env::var("TMDB_API_KEY") {
            config.catalog_api_key = key;
        }
        if let Ok(language) = std::env::var("WAYPOINT_LANGUAGE") {
            config.language = language;
        }

        config
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.toast_duration_ms == 0 {
            return Err(CoreError::Config(
                "toast_duration_ms must be greater than zero".to_string(),
            ));
        }
        if self.deep_link_scheme.trim().is_empty() {
            return Err(CoreError::Config(
                "deep_link_scheme cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Catalog client configured from these settings
    pub fn catalog_client(&self) -> Result<CatalogClient> {
        let mut client = CatalogClient::new(&self.catalog_base_url, &self.catalog_api_key)?;
        client.set_language(&self.language);
        Ok(client)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
