//! Parsed command invocations.

use std::collections::BTreeMap;

use crate::args::{ArgValue, parse_arg};
use crate::lexer::tokenize;

/// A command invocation parsed from message content.
///
/// `args` holds every token after the command name in input order.
/// `args_map` classifies each of those tokens; when two tokens share a key
/// the later one wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedMessage {
    /// Lowercased command name.
    pub command: String,
    /// Arguments joined with single spaces.
    pub text: String,
    /// Argument tokens.
    pub args: Vec<String>,
    /// Classified arguments keyed by name.
    pub args_map: BTreeMap<String, ArgValue>,
}

impl ParsedMessage {
    /// Parse message `content` that should begin with `symbol`.
    ///
    /// Returns `None` when the content does not start with the symbol or
    /// holds no tokens after it.
    pub fn parse(symbol: &str, content: &str) -> Option<Self> {
        let body = content.strip_prefix(symbol)?;
        Self::from_tokens(tokenize(body.trim()))
    }

    /// Build a message from already tokenized text.
    ///
    /// The first token is the command name. Returns `None` for an empty
    /// token list.
    pub fn from_tokens(tokens: Vec<String>) -> Option<Self> {
        let mut tokens = tokens.into_iter();
        let command = tokens.next()?.to_lowercase();
        let args: Vec<String> = tokens.collect();

        let args_map = args
            .iter()
            .map(|token| {
                let arg = parse_arg(token);
                (arg.key, arg.value)
            })
            .collect();

        Some(Self {
            command,
            text: args.join(" "),
            args,
            args_map,
        })
    }

    /// Positional argument by index.
    #[inline]
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// String value of a `key=value` argument.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.args_map.get(key).and_then(ArgValue::as_str)
    }

    /// Returns true if `key` was passed as a flag.
    pub fn has_flag(&self, key: &str) -> bool {
        self.args_map.get(key).is_some_and(ArgValue::is_flag)
    }
}
