use serde::Deserialize;
use std::collections::HashMap;

use crate::domain::{Champion, MatchDescriptor, MatchParticipant, PlayerId, RankedStats, TeamSide};

// --- Game API Response Structures ---

/// account-v1 lookup by riot id
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    pub puuid: String,
    #[serde(default)]
    pub game_name: Option<String>,
    #[serde(default)]
    pub tag_line: Option<String>,
}

/// spectator-v5 active game
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGameResponse {
    pub game_id: i64,
    #[serde(default)]
    pub participants: Vec<CurrentGameParticipant>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGameParticipant {
    pub team_id: i64,
    pub champion_id: i64,
    #[serde(default)]
    pub puuid: Option<String>,
    #[serde(default)]
    pub riot_id: Option<String>,
    #[serde(default)]
    pub summoner_name: Option<String>,
}

impl CurrentGameParticipant {
    fn display_name(&self) -> String {
        self.riot_id
            .iter()
            .chain(&self.summoner_name)
            .find(|name| !name.is_empty())
            .cloned()
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

impl CurrentGameResponse {
    /// Convert into a match descriptor, keeping seat order
    pub fn into_descriptor(self) -> Result<MatchDescriptor, String> {
        let participants = self
            .participants
            .into_iter()
            .map(|p| {
                let team = TeamSide::from_team_id(p.team_id)
                    .ok_or_else(|| format!("unknown team id {}", p.team_id))?;
                Ok(MatchParticipant {
                    team,
                    champion_id: p.champion_id,
                    display_name: p.display_name(),
                    player_id: PlayerId::new(p.puuid.unwrap_or_default()),
                })
            })
            .collect::<Result<Vec<_>, String>>()?;

        Ok(MatchDescriptor {
            match_id: self.game_id,
            participants,
        })
    }
}

/// league-v4 entry
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryResponse {
    pub queue_type: String,
    pub tier: String,
    pub rank: String,
    pub wins: u32,
    pub losses: u32,
}

impl From<LeagueEntryResponse> for RankedStats {
    fn from(entry: LeagueEntryResponse) -> Self {
        RankedStats {
            queue: entry.queue_type,
            tier: entry.tier,
            division: entry.rank,
            wins: entry.wins,
            losses: entry.losses,
        }
    }
}

// --- Patch Server Response Structures ---

/// champion.json for one patch
#[derive(Debug, Deserialize)]
pub struct ChampionListResponse {
    pub version: String,
    pub data: HashMap<String, ChampionInfo>,
}

#[derive(Debug, Deserialize)]
pub struct ChampionInfo {
    pub id: String,
    pub key: String,
    pub name: String,
}

impl ChampionInfo {
    pub fn to_champion(&self) -> Option<Champion> {
        let id = self.key.parse::<i64>().ok()?;
        Some(Champion {
            id,
            name: self.name.clone(),
        })
    }
}
