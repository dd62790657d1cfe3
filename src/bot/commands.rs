use log::info;

use crate::services::live_game::{log_failure, LiveGameService};
use crate::services::lookups::GameApi;

pub const TRIGGER: &str = "!currentLoL";
pub const USAGE: &str = "Usage: !currentLoL [summoner name]";

/// A chat message addressed to the bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// Trigger without a handle
    Usage,
    /// Report the match of this handle
    CurrentGame { handle: String },
}

impl ChatCommand {
    /// `None` for messages that are not for the bot
    pub fn parse(message: &str) -> Option<Self> {
        let mut tokens = message.split_whitespace();
        if tokens.next()? != TRIGGER {
            return None;
        }

        let handle = tokens.collect::<Vec<_>>().join(" ");
        if handle.is_empty() {
            Some(ChatCommand::Usage)
        } else {
            Some(ChatCommand::CurrentGame { handle })
        }
    }
}

/// Exactly one reply per command; error detail goes to the log only
pub async fn reply_to<A: GameApi>(service: &LiveGameService<A>, command: &ChatCommand) -> String {
    match command {
        ChatCommand::Usage => USAGE.to_string(),
        ChatCommand::CurrentGame { handle } => {
            info!("Command {} {}", TRIGGER, handle);
            match service.report(handle).await {
                Ok(report) => report,
                Err(err) => {
                    log_failure(handle, &err);
                    err.user_message().to_string()
                }
            }
        }
    }
}

/// Parse a raw chat message and answer it when it is a command
pub async fn handle_message<A: GameApi>(
    service: &LiveGameService<A>,
    message: &str,
) -> Option<String> {
    let command = ChatCommand::parse(message)?;
    Some(reply_to(service, &command).await)
}
