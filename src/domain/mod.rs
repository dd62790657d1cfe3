pub mod catalog;
pub mod models;

pub use catalog::{Champion, ChampionCatalog};
pub use models::{
    MatchDescriptor, MatchParticipant, MatchReport, PlayerId, PlayerIdentity, RankedStats,
    RosterEntry, TeamSide,
};
