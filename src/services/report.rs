use std::fmt::Write as _;
use std::sync::Arc;

use crate::config::TeamSplit;
use crate::domain::{
    ChampionCatalog, MatchParticipant, MatchReport, RankedStats, RosterEntry, TeamSide,
};

/// Column widths: summoner, champion, rank, W/L, win rate
const CELL_SIZES: [usize; 5] = [20, 11, 11, 8, 4];

/// Preformatted block delimiter understood by chat clients
const CODE_FENCE: &str = "```";

/// Joins a roster with the champion catalog and renders the scoreboard.
///
/// Rendering is a pure function of its input: no I/O, same output for the
/// same report.
pub struct ReportRenderer {
    catalog: Arc<ChampionCatalog>,
    team_split: TeamSplit,
}

impl ReportRenderer {
    pub fn new(catalog: Arc<ChampionCatalog>, team_split: TeamSplit) -> Self {
        Self {
            catalog,
            team_split,
        }
    }

    /// Join participants with their stats (same seat order) and split teams
    pub fn build_report(
        &self,
        match_id: i64,
        participants: Vec<MatchParticipant>,
        stats: Vec<RankedStats>,
    ) -> MatchReport {
        debug_assert_eq!(participants.len(), stats.len());

        let entries = participants
            .into_iter()
            .zip(stats)
            .map(|(participant, stats)| RosterEntry {
                champion_name: self.catalog.name_or_blank(participant.champion_id).to_string(),
                participant,
                stats,
            })
            .collect();

        let (blue, purple) = split_teams(entries, self.team_split);
        MatchReport {
            match_id,
            blue,
            purple,
        }
    }

    pub fn render(&self, report: &MatchReport) -> String {
        render_report(report)
    }
}

/// Split a seat-ordered roster into (blue, purple)
pub fn split_teams(
    mut entries: Vec<RosterEntry>,
    policy: TeamSplit,
) -> (Vec<RosterEntry>, Vec<RosterEntry>) {
    match policy {
        TeamSplit::Positional => {
            let purple = entries.split_off(entries.len() / 2);
            (entries, purple)
        }
        TeamSplit::ByTeamId => entries
            .into_iter()
            .partition(|entry| entry.participant.team == TeamSide::Blue),
    }
}

pub fn render_report(report: &MatchReport) -> String {
    let mut table = String::new();

    table.push_str(CODE_FENCE);
    table.push('\n');
    write_team(&mut table, TeamSide::Blue, &report.blue);
    write_team(&mut table, TeamSide::Purple, &report.purple);
    table.push_str(CODE_FENCE);

    table
}

fn write_team(table: &mut String, side: TeamSide, entries: &[RosterEntry]) {
    table.push_str(side.title());
    table.push('\n');
    write_header(table);
    write_rule(table);
    for entry in entries {
        write_row(table, entry);
    }
    write_rule(table);
}

fn write_header(table: &mut String) {
    let _ = writeln!(
        table,
        "{:<21}{:>12}{:>12}{:>9}{:>5}",
        "Summoner", "Champion", "Rank", "W/L", "%"
    );
}

fn write_rule(table: &mut String) {
    table.push('+');
    for size in CELL_SIZES {
        table.push_str(&"-".repeat(size));
        table.push('+');
    }
    table.push('\n');
}

fn write_row(table: &mut String, entry: &RosterEntry) {
    let stats = &entry.stats;
    let _ = writeln!(
        table,
        "|{:<20}|{:>11}|{:>11}|{:>8}|{:>3}%|",
        fit(&entry.participant.display_name, CELL_SIZES[0]),
        fit(&entry.champion_name, CELL_SIZES[1]),
        stats.rank_label(),
        stats.record_label(),
        stats.win_rate()
    );
}

/// Cut `text` to at most `width` characters
fn fit(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
