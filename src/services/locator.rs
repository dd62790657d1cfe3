use log::{info, warn};
use std::time::Duration;

use super::lookups::MatchService;
use super::with_timeout;
use crate::domain::{MatchDescriptor, PlayerId};
use crate::errors::{ApiError, LookupError, Stage};

/// A scoreboard needs two sides
pub const MIN_PARTICIPANTS: usize = 2;

/// Find the match the player is currently in
pub async fn locate_match<S: MatchService>(
    service: &S,
    player_id: &PlayerId,
    timeout: Duration,
) -> Result<MatchDescriptor, LookupError> {
    let descriptor = with_timeout(timeout, service.active_match(player_id))
        .await
        .map_err(|source| match source {
            ApiError::NotFound => LookupError::NotInGame {
                player_id: player_id.clone(),
            },
            other => {
                warn!("Active game lookup for {} failed: {}", player_id, other);
                LookupError::unavailable(Stage::Match, other)
            }
        })?;

    let count = descriptor.participants.len();
    if count < MIN_PARTICIPANTS {
        warn!(
            "Match {} reported only {} participant(s)",
            descriptor.match_id, count
        );
        return Err(LookupError::MalformedMatch {
            match_id: descriptor.match_id,
            count,
        });
    }

    info!("Found match {} with {} participants", descriptor.match_id, count);
    Ok(descriptor)
}
