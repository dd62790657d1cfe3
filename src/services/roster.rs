use futures::stream::{self, StreamExt};
use log::{debug, info, warn};
use std::time::Duration;

use super::lookups::RankedStatsService;
use super::with_timeout;
use crate::domain::{MatchParticipant, RankedStats};
use crate::errors::{ApiError, LookupError};

/// Queue shown on the scoreboard when a player has several ladder entries
pub const PREFERRED_QUEUE: &str = "RANKED_SOLO_5x5";

/// Limits for one roster fan-out
#[derive(Debug, Clone, Copy)]
pub struct FanOutLimits {
    pub max_in_flight: usize,
    pub timeout: Duration,
}

/// Fetch ranked stats for every participant.
///
/// Lookups run concurrently, up to `max_in_flight` at once. The result is only
/// reduced after every lookup has finished and is returned in seat order. Any
/// failed lookup fails the whole roster with the first failing seat.
pub async fn fetch_roster<S: RankedStatsService>(
    service: &S,
    participants: &[MatchParticipant],
    limits: FanOutLimits,
) -> Result<Vec<RankedStats>, LookupError> {
    info!("Fetching ranked stats for {} participants", participants.len());

    let lookups = participants
        .iter()
        .map(|participant| lookup_participant(service, participant, limits.timeout));

    let results: Vec<Result<RankedStats, ApiError>> = stream::iter(lookups)
        .buffered(limits.max_in_flight.max(1))
        .collect()
        .await;

    collect_in_seat_order(participants, results)
}

async fn lookup_participant<S: RankedStatsService>(
    service: &S,
    participant: &MatchParticipant,
    timeout: Duration,
) -> Result<RankedStats, ApiError> {
    let entries = with_timeout(timeout, service.stats_for(&participant.player_id)).await?;
    debug!(
        "{} has {} ladder entries",
        participant.player_id,
        entries.len()
    );
    select_entry(entries).ok_or(ApiError::NotFound)
}

/// Solo queue entry when present, otherwise the first entry
pub fn select_entry(entries: Vec<RankedStats>) -> Option<RankedStats> {
    let preferred = entries.iter().position(|e| e.queue == PREFERRED_QUEUE);
    entries.into_iter().nth(preferred.unwrap_or(0))
}

fn collect_in_seat_order(
    participants: &[MatchParticipant],
    results: Vec<Result<RankedStats, ApiError>>,
) -> Result<Vec<RankedStats>, LookupError> {
    participants
        .iter()
        .zip(results)
        .map(|(participant, result)| {
            result.map_err(|source| {
                warn!(
                    "Ranked lookup for {} ({}) failed: {}",
                    participant.display_name, participant.player_id, source
                );
                LookupError::PartialRosterFailure {
                    player_id: participant.player_id.clone(),
                    source,
                }
            })
        })
        .collect()
}
