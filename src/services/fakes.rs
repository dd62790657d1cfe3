//! In-memory game API for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::lookups::{IdentityService, MatchService, RankedStatsService};
use crate::domain::{
    MatchDescriptor, MatchParticipant, PlayerId, PlayerIdentity, RankedStats, TeamSide,
};
use crate::errors::ApiError;

#[derive(Default)]
pub struct FakeGameApi {
    players: HashMap<String, String>,
    identity_error: Option<ApiError>,
    matches: HashMap<String, MatchDescriptor>,
    match_error: Option<ApiError>,
    stats: HashMap<String, Result<Vec<RankedStats>, ApiError>>,
    stats_delays: HashMap<String, Duration>,
    delay: Duration,
    identity_calls: AtomicUsize,
    match_calls: AtomicUsize,
    stats_calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeGameApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_player(mut self, handle: &str, id: &str) -> Self {
        self.players.insert(handle.to_string(), id.to_string());
        self
    }

    pub fn with_identity_error(mut self, error: ApiError) -> Self {
        self.identity_error = Some(error);
        self
    }

    pub fn with_match(
        mut self,
        player_id: &str,
        match_id: i64,
        participants: Vec<MatchParticipant>,
    ) -> Self {
        self.matches.insert(
            player_id.to_string(),
            MatchDescriptor {
                match_id,
                participants,
            },
        );
        self
    }

    pub fn with_match_error(mut self, error: ApiError) -> Self {
        self.match_error = Some(error);
        self
    }

    pub fn with_stats(mut self, player_id: &str, stats: Vec<RankedStats>) -> Self {
        self.stats.insert(player_id.to_string(), Ok(stats));
        self
    }

    pub fn with_stats_error(mut self, player_id: &str, error: ApiError) -> Self {
        self.stats.insert(player_id.to_string(), Err(error));
        self
    }

    pub fn with_stats_delay(mut self, player_id: &str, delay: Duration) -> Self {
        self.stats_delays.insert(player_id.to_string(), delay);
        self
    }

    /// Delay applied to every call
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn identity_calls(&self) -> usize {
        self.identity_calls.load(Ordering::SeqCst)
    }

    pub fn match_calls(&self) -> usize {
        self.match_calls.load(Ordering::SeqCst)
    }

    pub fn stats_calls(&self) -> usize {
        self.stats_calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn pause(&self, extra: Duration) {
        let total = self.delay + extra;
        if !total.is_zero() {
            tokio::time::sleep(total).await;
        }
    }
}

impl IdentityService for FakeGameApi {
    async fn resolve(&self, handle: &str) -> Result<PlayerIdentity, ApiError> {
        self.identity_calls.fetch_add(1, Ordering::SeqCst);
        self.pause(Duration::ZERO).await;

        if let Some(error) = &self.identity_error {
            return Err(error.clone());
        }

        let id = self.players.get(handle).ok_or(ApiError::NotFound)?;
        Ok(PlayerIdentity {
            handle: handle.to_string(),
            internal_id: PlayerId::new(id.clone()),
        })
    }
}

impl MatchService for FakeGameApi {
    async fn active_match(&self, player_id: &PlayerId) -> Result<MatchDescriptor, ApiError> {
        self.match_calls.fetch_add(1, Ordering::SeqCst);
        self.pause(Duration::ZERO).await;

        if let Some(error) = &self.match_error {
            return Err(error.clone());
        }

        self.matches
            .get(player_id.as_str())
            .cloned()
            .ok_or(ApiError::NotFound)
    }
}

impl RankedStatsService for FakeGameApi {
    async fn stats_for(&self, player_id: &PlayerId) -> Result<Vec<RankedStats>, ApiError> {
        self.stats_calls.fetch_add(1, Ordering::SeqCst);
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let extra = self
            .stats_delays
            .get(player_id.as_str())
            .copied()
            .unwrap_or_default();
        self.pause(extra).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.stats
            .get(player_id.as_str())
            .cloned()
            .unwrap_or(Err(ApiError::NotFound))
    }
}

pub fn participant(champion_id: i64, player_id: &str) -> MatchParticipant {
    seat(TeamSide::Blue, champion_id, player_id)
}

pub fn seat(team: TeamSide, champion_id: i64, player_id: &str) -> MatchParticipant {
    MatchParticipant {
        team,
        champion_id,
        player_id: PlayerId::from(player_id),
        display_name: format!("Player {}", player_id),
    }
}

pub fn ranked(tier: &str, division: &str, wins: u32, losses: u32) -> RankedStats {
    RankedStats {
        queue: "RANKED_SOLO_5x5".to_string(),
        tier: tier.to_string(),
        division: division.to_string(),
        wins,
        losses,
    }
}
