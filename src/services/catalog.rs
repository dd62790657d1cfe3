use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::ddragon_client::is_release_version;
use crate::api::models::ChampionListResponse;
use crate::api::DataDragonClient;
use crate::cache::Cache;
use crate::config::AppConfig;
use crate::domain::{Champion, ChampionCatalog};
use crate::errors::CatalogError;

const SNAPSHOT_KEY: &str = "catalog";

/// Parsed catalog as kept in the cache
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub version: String,
    pub fetched_at: DateTime<Utc>,
    pub champions: Vec<Champion>,
}

impl CatalogSnapshot {
    pub fn into_catalog(self) -> ChampionCatalog {
        ChampionCatalog::new(self.champions)
    }
}

/// Builds the champion catalog from the patch server, with a disk cache
pub struct CatalogService {
    cache: Cache,
    client: DataDragonClient,
}

impl CatalogService {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self {
            cache: Cache::new(&config.catalog.cache_dir)?,
            client: DataDragonClient::new(&config.catalog, &config.riot)?,
        })
    }

    /// Catalog for the latest patch, or the last cached one when the patch
    /// server cannot be reached
    pub async fn load(&self) -> Result<CatalogSnapshot, CatalogError> {
        info!("=== Loading Champion Catalog ===");

        match self.fetch_latest().await {
            Ok(snapshot) => {
                if let Err(e) = self.cache.save_parsed(SNAPSHOT_KEY, &snapshot) {
                    warn!("Failed to save catalog snapshot: {:?}", e);
                }
                info!(
                    "  → {} champions for patch {}",
                    snapshot.champions.len(),
                    snapshot.version
                );
                Ok(snapshot)
            }
            Err(e) => {
                warn!("Could not refresh champion catalog: {}", e);
                let snapshot = self
                    .cache
                    .load_parsed::<CatalogSnapshot>(SNAPSHOT_KEY)?
                    .ok_or(e)?;
                warn!(
                    "  → Using cached catalog for patch {} from {}",
                    snapshot.version, snapshot.fetched_at
                );
                Ok(snapshot)
            }
        }
    }

    async fn fetch_latest(&self) -> Result<CatalogSnapshot, CatalogError> {
        // Step 1: Latest patch
        let version = self.latest_version().await?;
        info!("Step 1: Latest patch is {}", version);

        // Step 2: champion.json, from the raw cache when already downloaded
        let raw = self.load_champions_raw(&version).await?;

        // Step 3: Parse
        let champions = parse_champion_list(raw)?;
        Ok(CatalogSnapshot {
            version,
            fetched_at: Utc::now(),
            champions,
        })
    }

    async fn latest_version(&self) -> Result<String, CatalogError> {
        let versions = self.client.fetch_versions().await?;
        versions
            .into_iter()
            .find(|v| is_release_version(v))
            .ok_or(CatalogError::NoVersions)
    }

    async fn load_champions_raw(&self, version: &str) -> Result<Value, CatalogError> {
        let key = format!("champion-{}", version);
        if let Some(cached) = self.cache.load_raw(&key)? {
            info!("Step 2: Using cached champion list for {}", version);
            return Ok(cached);
        }

        info!("Step 2: Downloading champion list for {}", version);
        let raw = self.client.fetch_champions_raw(version).await?;
        if let Err(e) = self.cache.save_raw(&key, &raw) {
            warn!("Failed to cache champion list {}: {:?}", version, e);
        }
        Ok(raw)
    }
}

/// Champions from a patch server champion.json document
pub fn parse_champion_list(raw: Value) -> Result<Vec<Champion>, CatalogError> {
    let list: ChampionListResponse =
        serde_json::from_value(raw).map_err(|e| CatalogError::Malformed(e.to_string()))?;

    let mut champions = list
        .data
        .values()
        .map(|info| {
            info.to_champion().ok_or_else(|| CatalogError::InvalidKey {
                name: info.id.clone(),
                key: info.key.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    champions.sort_by_key(|c| c.id);

    Ok(champions)
}
