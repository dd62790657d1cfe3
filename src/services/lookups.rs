use std::future::Future;

use crate::domain::{MatchDescriptor, PlayerId, PlayerIdentity, RankedStats};
use crate::errors::ApiError;

/// Handle -> player id
pub trait IdentityService: Send + Sync {
    fn resolve(&self, handle: &str) -> impl Future<Output = Result<PlayerIdentity, ApiError>> + Send;
}

/// Player id -> in-progress match. `ApiError::NotFound` means no active match.
pub trait MatchService: Send + Sync {
    fn active_match(
        &self,
        player_id: &PlayerId,
    ) -> impl Future<Output = Result<MatchDescriptor, ApiError>> + Send;
}

/// Player id -> every ladder entry the player has
pub trait RankedStatsService: Send + Sync {
    fn stats_for(
        &self,
        player_id: &PlayerId,
    ) -> impl Future<Output = Result<Vec<RankedStats>, ApiError>> + Send;
}

/// Everything the live-game pipeline needs from the outside world
pub trait GameApi: IdentityService + MatchService + RankedStatsService {}

impl<T: IdentityService + MatchService + RankedStatsService> GameApi for T {}
