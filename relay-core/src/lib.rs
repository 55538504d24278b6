//! # relay-core
//!
//! Core types and traits for the file relay bot: [`Bot`], [`Handler`], message, chat and user types,
//! errors and tracing initialization. Transport-agnostic; used by handler-chain, relay-telegram and link-handlers.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{RelayError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Document, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User,
};
