//! # bangcmd-proto
//!
//! Wire syntax for prefix-style chat commands such as
//! `!roll sides=20 "with advantage"`.
//!
//! ## Features
//!
//! - Quote-aware tokenizer (`"..."` and `'...'` keep whitespace)
//! - `key=value` / `key:value` argument classification with flag fallback
//! - [`ParsedMessage`] built straight from raw message content
//! - Optional `serde` support for the parsed types
//!
//! ## Quick Start
//!
//! ```rust
//! use bangcmd_proto::{ArgValue, ParsedMessage};
//!
//! let parsed = ParsedMessage::parse("!", "!Roll sides=20 'with advantage' loud").unwrap();
//!
//! assert_eq!(parsed.command, "roll");
//! assert_eq!(parsed.args, vec!["sides=20", "with advantage", "loud"]);
//! assert_eq!(parsed.value("sides"), Some("20"));
//! assert_eq!(parsed.args_map.get("loud"), Some(&ArgValue::Flag));
//! ```
//!
//! Content that does not start with the symbol, or that holds nothing but the
//! symbol, is not a command:
//!
//! ```rust
//! use bangcmd_proto::ParsedMessage;
//!
//! assert!(ParsedMessage::parse("!", "hello there").is_none());
//! assert!(ParsedMessage::parse("!", "!   ").is_none());
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod args;
pub mod lexer;
pub mod message;

pub use self::args::{Arg, ArgValue, parse_arg};
pub use self::lexer::tokenize;
pub use self::message::ParsedMessage;
