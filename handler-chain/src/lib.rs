//! # Handler chain
//!
//! [`HandlerChain`] runs a sequence of handlers: all `before` in order (any false stops the chain), then
//! `handle` until Stop or Reply, then all `after` in reverse. [`Router`] maps message patterns to handlers
//! explicitly and is itself a handler, usually the last link of a chain.

mod chain;
mod router;

pub use chain::HandlerChain;
pub use router::{parse_command, MessagePattern, Router};
