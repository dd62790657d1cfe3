use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::domain::PlayerId;

/// Outcome of a single call to an external lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,
    #[error("rate limited by upstream")]
    RateLimited,
    #[error("upstream returned status {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

/// Pipeline stage that talks to an external service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Identity,
    Match,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Identity => "identity service",
            Stage::Match => "match service",
        };
        write!(f, "{}", name)
    }
}

/// Why a live-game report could not be produced
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("summoner `{handle}` does not exist")]
    NotFound { handle: String },

    #[error("player {player_id} is not in game")]
    NotInGame { player_id: PlayerId },

    #[error("match {match_id} has {count} participants, at least 2 required")]
    MalformedMatch { match_id: i64, count: usize },

    #[error("ranked lookup failed for participant {player_id}: {source}")]
    PartialRosterFailure {
        player_id: PlayerId,
        #[source]
        source: ApiError,
    },

    #[error("{stage} unavailable: {source}")]
    Unavailable {
        stage: Stage,
        #[source]
        source: ApiError,
    },
}

impl LookupError {
    pub fn unavailable(stage: Stage, source: ApiError) -> Self {
        LookupError::Unavailable { stage, source }
    }

    /// Message safe to show to the person who sent the command
    pub fn user_message(&self) -> &'static str {
        match self {
            LookupError::NotFound { .. } => "Summoner does not exist.",
            LookupError::NotInGame { .. } => "Not in game.",
            LookupError::MalformedMatch { .. } | LookupError::PartialRosterFailure { .. } => {
                "Could not get game info."
            }
            LookupError::Unavailable { .. } => "Could not reach the game servers, try again later.",
        }
    }
}

/// Failure while building the champion catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("patch server unavailable: {0}")]
    Unavailable(#[from] ApiError),
    #[error("patch server listed no versions")]
    NoVersions,
    #[error("malformed champion list: {0}")]
    Malformed(String),
    #[error("champion `{name}` has a non-numeric key `{key}`")]
    InvalidKey { name: String, key: String },
    #[error(transparent)]
    Cache(#[from] anyhow::Error),
}

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}
