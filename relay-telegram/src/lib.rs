//! # relay-telegram
//!
//! Telegram layer: adapters from teloxide types, [`relay_core::Bot`] implementation, minimal config, REPL runner.
//! Handles only Telegram connectivity and dispatching messages into a handler chain.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::{register_commands, run_repl, spawn_job};
