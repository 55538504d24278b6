//! Core types: user, chat, message, document, handler response, and Handler trait.
//!
//! One file per main type.

mod chat;
mod document;
mod handler;
mod message;
mod response;
mod user;

pub use chat::Chat;
pub use document::Document;
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use message::Message;
pub use response::HandlerResponse;
pub use user::User;
