//! # File relay bot
//!
//! Wires relay-core, handler-chain, relay-telegram and link-handlers: loads config from env, builds the router
//! (`/start` → usage, text → link relay) behind a logging handler, and runs the Telegram REPL.

pub mod app;
pub mod cli;
pub mod config;

pub use app::{build_handler_chain, run_bot};
pub use cli::{load_config, Cli, Commands};
pub use config::BotConfig;
