pub mod commands;
pub mod console;

pub use commands::{handle_message, ChatCommand};
