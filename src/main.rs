use anyhow::Result;
use colored::Colorize;

use live_scoreboard::cli::Command;
use live_scoreboard::{
    handle_champions, handle_completions, handle_listen, handle_report, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Report { handle } => handle_report(&Command::joined_handle(handle)),
        Command::Listen => handle_listen(),
        Command::Champions => handle_champions(),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
