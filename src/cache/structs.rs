use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// File-based cache for patch-server downloads.
///
/// `raw/` keeps downloads exactly as served, one file per patch.
/// `parsed/` keeps derived snapshots that can be loaded without the network.
pub struct Cache {
    raw_dir: PathBuf,
    parsed_dir: PathBuf,
}

impl Cache {
    /// Create a new cache instance
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Result<Self> {
        let cache_dir = cache_dir.as_ref();
        let raw_dir = cache_dir.join("raw");
        let parsed_dir = cache_dir.join("parsed");

        fs::create_dir_all(&raw_dir).context("Failed to create raw cache directory")?;
        fs::create_dir_all(&parsed_dir).context("Failed to create parsed cache directory")?;

        Ok(Self {
            raw_dir,
            parsed_dir,
        })
    }

    /// Save raw download to cache
    pub fn save_raw(&self, key: &str, data: &Value) -> Result<()> {
        let file_path = entry_path(&self.raw_dir, key);
        write_json(&file_path, data)?;
        info!("Saved raw data to cache: {}", file_path.display());
        Ok(())
    }

    /// Load raw download from cache
    pub fn load_raw(&self, key: &str) -> Result<Option<Value>> {
        let file_path = entry_path(&self.raw_dir, key);
        read_json(&file_path)
    }

    /// Save parsed data to cache
    pub fn save_parsed<T: Serialize>(&self, key: &str, data: &T) -> Result<()> {
        let file_path = entry_path(&self.parsed_dir, key);
        write_json(&file_path, data)?;
        info!("Saved parsed data to cache: {}", file_path.display());
        Ok(())
    }

    /// Load parsed data from cache
    pub fn load_parsed<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Result<Option<T>> {
        let file_path = entry_path(&self.parsed_dir, key);
        read_json(&file_path)
    }

}

fn entry_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{}.json", key))
}

fn write_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

/// `None` when the entry was never written
fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Option<T>> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e).with_context(|| format!("Failed to read {}", path.display())),
    };

    debug!("Read cache entry {} ({} bytes)", path.display(), json.len());
    let preview: String = json.chars().take(200).collect();
    serde_json::from_str(&json)
        .map(Some)
        .with_context(|| format!("Corrupt cache entry {}: {}", path.display(), preview))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestData {
        value: String,
    }

    fn temp_cache(name: &str) -> (PathBuf, Cache) {
        let dir = std::env::temp_dir().join(format!("live_scoreboard_{}_{}", name, std::process::id()));
        let cache = Cache::new(&dir).unwrap();
        (dir, cache)
    }

    #[test]
    fn test_parsed_save_and_load() {
        let (dir, cache) = temp_cache("parsed");
        let data = TestData {
            value: "test".to_string(),
        };

        cache.save_parsed("test_key", &data).unwrap();
        let loaded: Option<TestData> = cache.load_parsed("test_key").unwrap();

        assert_eq!(loaded, Some(data));
        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_missing_raw_entry() {
        let (dir, cache) = temp_cache("raw");

        assert!(cache.load_raw("champion-0.0.0").unwrap().is_none());

        cache
            .save_raw("champion-1.0.0", &serde_json::json!({"version": "1.0.0"}))
            .unwrap();
        let loaded = cache.load_raw("champion-1.0.0").unwrap().unwrap();
        assert_eq!(loaded["version"], "1.0.0");

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_patch_version_keys_keep_their_dots() {
        let (dir, cache) = temp_cache("dotted");

        cache
            .save_raw("champion-14.1.1", &serde_json::json!({"version": "14.1.1"}))
            .unwrap();
        cache
            .save_raw("champion-14.1.2", &serde_json::json!({"version": "14.1.2"}))
            .unwrap();

        assert!(dir.join("raw").join("champion-14.1.1.json").exists());
        let loaded = cache.load_raw("champion-14.1.1").unwrap().unwrap();
        assert_eq!(loaded["version"], "14.1.1");

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_corrupt_entry_is_an_error() {
        let (dir, cache) = temp_cache("corrupt");
        fs::write(dir.join("parsed").join("catalog.json"), "{not json").unwrap();

        let loaded: Result<Option<TestData>> = cache.load_parsed("catalog");
        let err = loaded.unwrap_err();

        assert!(err.to_string().contains("Corrupt cache entry"));
        fs::remove_dir_all(dir).unwrap();
    }
}
