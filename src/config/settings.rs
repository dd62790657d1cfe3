use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

/// How the renderer decides which side a seat belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeamSplit {
    /// First half of the seats is blue, the rest purple
    #[default]
    Positional,
    /// Group seats by the team id reported with the match
    ByTeamId,
}

impl FromStr for TeamSplit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "positional" => Ok(TeamSplit::Positional),
            "team-id" | "team_id" | "teamid" => Ok(TeamSplit::ByTeamId),
            other => anyhow::bail!("Unknown team split policy: {}", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RiotSettings {
    pub api_key: Option<String>,
    pub platform_url: String,
    pub regional_url: String,
    pub default_tag_line: String,
    pub user_agent: &'static str,
    pub request_timeout: Duration,
}

impl Default for RiotSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            platform_url: "https://na1.api.riotgames.com".to_string(),
            regional_url: "https://americas.api.riotgames.com".to_string(),
            default_tag_line: "NA1".to_string(),
            user_agent: "LiveScoreboard/0.1",
            request_timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub base_url: String,
    pub locale: &'static str,
    pub cache_dir: PathBuf,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: "https://ddragon.leagueoflegends.com".to_string(),
            locale: "en_US",
            cache_dir: PathBuf::from("cache"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportSettings {
    pub team_split: TeamSplit,
    pub max_concurrent_lookups: usize,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            team_split: TeamSplit::Positional,
            max_concurrent_lookups: 10,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub riot: RiotSettings,
    pub catalog: CatalogSettings,
    pub report: ReportSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by environment variables.
    ///
    /// - `RIOT_API_KEY` - developer or production key for the game API
    /// - `RIOT_PLATFORM_URL` - platform host (spectator, league)
    /// - `RIOT_REGIONAL_URL` - regional host (account)
    /// - `RIOT_DEFAULT_TAG` - tag line used when a handle has no `#`
    /// - `LIVE_SCOREBOARD_CACHE_DIR` - champion metadata cache
    /// - `LIVE_SCOREBOARD_TEAM_SPLIT` - `positional` or `team-id`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::new();

        config.riot.api_key = lookup("RIOT_API_KEY").filter(|key| !key.trim().is_empty());
        if let Some(url) = lookup("RIOT_PLATFORM_URL") {
            config.riot.platform_url = url;
        }
        if let Some(url) = lookup("RIOT_REGIONAL_URL") {
            config.riot.regional_url = url;
        }
        if let Some(tag) = lookup("RIOT_DEFAULT_TAG") {
            config.riot.default_tag_line = tag;
        }
        if let Some(dir) = lookup("LIVE_SCOREBOARD_CACHE_DIR") {
            config.catalog.cache_dir = PathBuf::from(dir);
        }
        if let Some(split) = lookup("LIVE_SCOREBOARD_TEAM_SPLIT") {
            config.report.team_split = split
                .parse()
                .context("Invalid LIVE_SCOREBOARD_TEAM_SPLIT")?;
        }

        Ok(config)
    }

    pub fn require_api_key(&self) -> Result<&str> {
        self.riot
            .api_key
            .as_deref()
            .context("RIOT_API_KEY environment variable must be set")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert!(config.riot.api_key.is_none());
        assert_eq!(config.riot.default_tag_line, "NA1");
        assert_eq!(config.report.team_split, TeamSplit::Positional);
        assert_eq!(config.report.max_concurrent_lookups, 10);
        assert!(config.require_api_key().is_err());
    }

    #[test]
    fn test_env_overrides() {
        let config = config_from(&[
            ("RIOT_API_KEY", "RGAPI-test"),
            ("RIOT_PLATFORM_URL", "https://euw1.api.riotgames.com"),
            ("RIOT_DEFAULT_TAG", "EUW"),
            ("LIVE_SCOREBOARD_TEAM_SPLIT", "team-id"),
        ])
        .unwrap();

        assert_eq!(config.require_api_key().unwrap(), "RGAPI-test");
        assert_eq!(config.riot.platform_url, "https://euw1.api.riotgames.com");
        assert_eq!(config.riot.default_tag_line, "EUW");
        assert_eq!(config.report.team_split, TeamSplit::ByTeamId);
    }

    #[test]
    fn test_blank_api_key_is_ignored() {
        let config = config_from(&[("RIOT_API_KEY", "  ")]).unwrap();
        assert!(config.riot.api_key.is_none());
    }

    #[test]
    fn test_invalid_team_split() {
        assert!(config_from(&[("LIVE_SCOREBOARD_TEAM_SPLIT", "random")]).is_err());
    }
}
