use anyhow::Result;
use log::info;
use serde_json::Value;

use crate::config::{CatalogSettings, RiotSettings};
use crate::errors::ApiError;
use crate::http::JsonClient;

/// Static data (patch server) client
pub struct DataDragonClient {
    client: JsonClient,
    base_url: String,
    locale: &'static str,
}

impl DataDragonClient {
    pub fn new(catalog: &CatalogSettings, riot: &RiotSettings) -> Result<Self> {
        let client = JsonClient::new(riot.user_agent, riot.request_timeout, None)?;

        Ok(Self {
            client,
            base_url: catalog.base_url.trim_end_matches('/').to_string(),
            locale: catalog.locale,
        })
    }

    /// Published patch versions, newest first
    pub async fn fetch_versions(&self) -> Result<Vec<String>, ApiError> {
        let url = format!("{}/api/versions.json", self.base_url);
        self.client.get_json(&url).await
    }

    /// Raw champion.json for one patch
    pub async fn fetch_champions_raw(&self, version: &str) -> Result<Value, ApiError> {
        let url = self.build_champions_url(version);
        info!("Downloading champion list from {}", url);
        self.client.get_json(&url).await
    }

    fn build_champions_url(&self, version: &str) -> String {
        format!(
            "{}/cdn/{}/data/{}/champion.json",
            self.base_url, version, self.locale
        )
    }
}

/// Patch versions look like `14.20.1`; the list also carries legacy entries
pub fn is_release_version(version: &str) -> bool {
    !version.is_empty()
        && version.split('.').all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()))
}
