use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Live match scoreboard for ranked League of Legends games")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Print the scoreboard of a player's current match
    Report {
        /// Player handle (`name#tag`), may be given as several words
        #[arg(required = true, num_args = 1..)]
        handle: Vec<String>,
    },
    /// Answer `!currentLoL <handle>` chat commands read from stdin
    Listen,
    /// Download (or load cached) champion metadata and print it
    Champions,
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Command {
    /// Words of a handle rejoined the way chat commands rejoin them
    pub fn joined_handle(words: &[String]) -> String {
        words
            .iter()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
