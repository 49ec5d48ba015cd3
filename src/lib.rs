//! # bangcmd
//!
//! Prefix command dispatch for chat bots.
//!
//! A [`Bot`] subscribes to a chat client's message event, recognizes
//! messages that start with the configured symbol (`!` by default), and
//! routes them to registered command handlers. Unknown commands get a
//! "did you mean" reply built from the registered names, and a `help`
//! command is always available.
//!
//! ```rust
//! use bangcmd::{Bot, Config, Documentation, EventSource};
//!
//! fn setup<C: EventSource>(client: C) {
//!     let bot = Bot::new(client, Config::default());
//!     bot.add_sync_fn(
//!         "ping",
//!         |_message, _client| anyhow::Ok("pong"),
//!         Some(Documentation::new().description("Checks that the bot is alive")),
//!     );
//! }
//! ```
//!
//! The command syntax itself (tokenizing and argument parsing) lives in the
//! [`bangcmd_proto`] crate and is re-exported here.

pub mod bot;
pub mod config;
pub mod error;
pub mod format;
pub mod handlers;
pub mod metrics;
pub mod telemetry;
pub mod transport;

pub use bangcmd_proto::{Arg, ArgValue, ParsedMessage, parse_arg, tokenize};
pub use bot::{Bot, BotCommand};
pub use config::{Config, ConfigError, ConfigOverrides, Template};
pub use error::HandlerError;
pub use format::Decoration;
pub use handlers::{
    Command, CommandMessage, Documentation, Example, Handler, HandlerResult, Response,
};
pub use transport::{EventSource, ReplyableMessage};
