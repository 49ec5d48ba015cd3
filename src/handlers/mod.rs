//! Command handlers.
//!
//! This module contains the Handler trait and command registry, the built-in
//! help command, and the suggestion engine used when a command is unknown.

pub mod core;
pub mod help;
pub mod suggest;

pub use self::core::{
    Command, CommandMessage, Documentation, Example, FnHandler, Handler, HandlerResult, Registry,
    Response, SyncFnHandler,
};
pub use help::HelpCommand;
