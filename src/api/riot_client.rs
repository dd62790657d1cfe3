use anyhow::Result;
use log::{debug, info};

use crate::api::models::{AccountResponse, CurrentGameResponse, LeagueEntryResponse};
use crate::config::RiotSettings;
use crate::domain::{MatchDescriptor, PlayerId, PlayerIdentity, RankedStats};
use crate::errors::ApiError;
use crate::http::JsonClient;
use crate::services::lookups::{IdentityService, MatchService, RankedStatsService};

/// Game API client covering identity, spectator and league lookups
pub struct RiotClient {
    client: JsonClient,
    platform_url: String,
    regional_url: String,
    default_tag_line: String,
}

impl RiotClient {
    pub fn new(settings: &RiotSettings, api_key: &str) -> Result<Self> {
        let client = JsonClient::new(
            settings.user_agent,
            settings.request_timeout,
            Some(api_key.to_string()),
        )?;

        Ok(Self {
            client,
            platform_url: settings.platform_url.trim_end_matches('/').to_string(),
            regional_url: settings.regional_url.trim_end_matches('/').to_string(),
            default_tag_line: settings.default_tag_line.clone(),
        })
    }

    // --- Helper Methods ---

    fn build_account_url(&self, handle: &str) -> String {
        let (game_name, tag_line) = split_handle(handle, &self.default_tag_line);
        format!(
            "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
            self.regional_url,
            urlencoding::encode(game_name),
            urlencoding::encode(tag_line)
        )
    }

    fn build_active_game_url(&self, player_id: &PlayerId) -> String {
        format!(
            "{}/lol/spectator/v5/active-games/by-summoner/{}",
            self.platform_url,
            urlencoding::encode(player_id.as_str())
        )
    }

    fn build_league_entries_url(&self, player_id: &PlayerId) -> String {
        format!(
            "{}/lol/league/v4/entries/by-puuid/{}",
            self.platform_url,
            urlencoding::encode(player_id.as_str())
        )
    }
}

impl IdentityService for RiotClient {
    async fn resolve(&self, handle: &str) -> Result<PlayerIdentity, ApiError> {
        let url = self.build_account_url(handle);
        info!("Resolving summoner {}", handle);

        let account: AccountResponse = self.client.get_json(&url).await?;
        debug!(
            "Resolved {} to account {:?}#{:?}",
            handle, account.game_name, account.tag_line
        );

        Ok(PlayerIdentity {
            handle: handle.to_string(),
            internal_id: PlayerId::new(account.puuid),
        })
    }
}

impl MatchService for RiotClient {
    async fn active_match(&self, player_id: &PlayerId) -> Result<MatchDescriptor, ApiError> {
        let url = self.build_active_game_url(player_id);
        info!("Fetching active game for {}", player_id);

        let game: CurrentGameResponse = self.client.get_json(&url).await?;
        game.into_descriptor().map_err(ApiError::Malformed)
    }
}

impl RankedStatsService for RiotClient {
    async fn stats_for(&self, player_id: &PlayerId) -> Result<Vec<RankedStats>, ApiError> {
        if player_id.is_empty() {
            return Err(ApiError::NotFound);
        }

        let url = self.build_league_entries_url(player_id);
        debug!("Fetching league entries for {}", player_id);

        let entries: Vec<LeagueEntryResponse> = self.client.get_json(&url).await?;
        Ok(entries.into_iter().map(RankedStats::from).collect())
    }
}

/// Split `name#tag`, falling back to `default_tag` when no tag is given
pub fn split_handle<'a>(handle: &'a str, default_tag: &'a str) -> (&'a str, &'a str) {
    match handle.rsplit_once('#') {
        Some((name, tag)) if !tag.trim().is_empty() => (name.trim(), tag.trim()),
        Some((name, _)) => (name.trim(), default_tag),
        None => (handle.trim(), default_tag),
    }
}
