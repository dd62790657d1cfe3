use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque player id issued by the identity service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Result of resolving a handle, lives for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerIdentity {
    pub handle: String,
    pub internal_id: PlayerId,
}

/// Side of the map a participant plays on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamSide {
    Blue,
    Purple,
}

impl TeamSide {
    /// Map the game's numeric team id (100 = blue, 200 = purple)
    pub fn from_team_id(team_id: i64) -> Option<Self> {
        match team_id {
            100 => Some(TeamSide::Blue),
            200 => Some(TeamSide::Purple),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TeamSide::Blue => "Blue Team",
            TeamSide::Purple => "Purple Team",
        }
    }
}

/// One seat in an active match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchParticipant {
    pub team: TeamSide,
    pub champion_id: i64,
    pub player_id: PlayerId,
    pub display_name: String,
}

/// Active match with participants in seat order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchDescriptor {
    pub match_id: i64,
    pub participants: Vec<MatchParticipant>,
}

/// One ladder entry for a player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedStats {
    pub queue: String,
    pub tier: String,
    pub division: String,
    pub wins: u32,
    pub losses: u32,
}

impl RankedStats {
    pub fn rank_label(&self) -> String {
        format!("{} {}", self.tier, self.division)
    }

    pub fn record_label(&self) -> String {
        format!("{}/{}", self.wins, self.losses)
    }

    /// Win percentage with truncating division, 0 when no games were played
    pub fn win_rate(&self) -> u32 {
        let games = self.wins as u64 + self.losses as u64;
        if games == 0 {
            return 0;
        }
        (self.wins as u64 * 100 / games) as u32
    }
}

/// Participant joined with their stats and champion name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub participant: MatchParticipant,
    pub stats: RankedStats,
    pub champion_name: String,
}

/// Roster split into the two sides, seat order kept inside each side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    pub match_id: i64,
    pub blue: Vec<RosterEntry>,
    pub purple: Vec<RosterEntry>,
}

impl MatchReport {
    pub fn len(&self) -> usize {
        self.blue.len() + self.purple.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blue.is_empty() && self.purple.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(wins: u32, losses: u32) -> RankedStats {
        RankedStats {
            queue: "RANKED_SOLO_5x5".to_string(),
            tier: "GOLD".to_string(),
            division: "II".to_string(),
            wins,
            losses,
        }
    }

    #[test]
    fn test_win_rate_truncates() {
        assert_eq!(stats(7, 3).win_rate(), 70);
        assert_eq!(stats(1, 2).win_rate(), 33);
        assert_eq!(stats(2, 1).win_rate(), 66);
    }

    #[test]
    fn test_win_rate_without_games_is_zero() {
        assert_eq!(stats(0, 0).win_rate(), 0);
    }

    #[test]
    fn test_labels() {
        let s = stats(10, 12);
        assert_eq!(s.rank_label(), "GOLD II");
        assert_eq!(s.record_label(), "10/12");
    }

    #[test]
    fn test_team_side_mapping() {
        assert_eq!(TeamSide::from_team_id(100), Some(TeamSide::Blue));
        assert_eq!(TeamSide::from_team_id(200), Some(TeamSide::Purple));
        assert_eq!(TeamSide::from_team_id(300), None);
    }
}
