//! Argument token classification.
//!
//! Every token after the command name is either a flag or a key/value pair:
//!
//! - `verbose`, `=verbose`, `k=`, `k:` are flags
//! - `k=v`, `k:v` are pairs; only the first `=` or `:` splits, so
//!   `url=http://x` keeps `http://x` as the value
//! - a value wrapped in one matching pair of `"` or `'` has the pair removed

use crate::lexer::is_quote;

/// Characters that separate a key from its value.
pub const DELIMITERS: [char; 2] = ['=', ':'];

/// The value side of an argument.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "FlagOrValue", into = "FlagOrValue"))]
pub enum ArgValue {
    /// A bare flag, equivalent to boolean `true`.
    Flag,
    /// An explicit string value.
    Value(String),
}

impl ArgValue {
    /// Returns true for flag arguments.
    #[inline]
    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Flag)
    }

    /// Returns the string value, or `None` for flags.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Flag => None,
            Self::Value(value) => Some(value),
        }
    }
}

/// Serialized shape of [`ArgValue`]: `true` for flags, a string otherwise.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum FlagOrValue {
    Flag(bool),
    Value(String),
}

#[cfg(feature = "serde")]
impl From<FlagOrValue> for ArgValue {
    fn from(raw: FlagOrValue) -> Self {
        match raw {
            FlagOrValue::Flag(_) => Self::Flag,
            FlagOrValue::Value(value) => Self::Value(value),
        }
    }
}

#[cfg(feature = "serde")]
impl From<ArgValue> for FlagOrValue {
    fn from(value: ArgValue) -> Self {
        match value {
            ArgValue::Flag => Self::Flag(true),
            ArgValue::Value(value) => Self::Value(value),
        }
    }
}

/// A classified argument token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arg {
    /// Argument name.
    pub key: String,
    /// Flag or value.
    pub value: ArgValue,
}

impl Arg {
    fn flag(key: &str) -> Self {
        Self {
            key: key.to_string(),
            value: ArgValue::Flag,
        }
    }
}

/// Classify a single argument token.
///
/// # Examples
///
/// ```
/// use bangcmd_proto::args::{parse_arg, ArgValue};
///
/// let arg = parse_arg("key=value");
/// assert_eq!(arg.key, "key");
/// assert_eq!(arg.value, ArgValue::Value("value".to_string()));
///
/// assert_eq!(parse_arg("flag").value, ArgValue::Flag);
/// assert_eq!(parse_arg("k=").value, ArgValue::Flag);
/// ```
pub fn parse_arg(token: &str) -> Arg {
    match token.find(DELIMITERS) {
        None => Arg::flag(token),
        Some(0) => Arg::flag(token.trim_start_matches(DELIMITERS)),
        Some(pos) => {
            let key = &token[..pos];
            // Both delimiters are one byte wide.
            let raw = &token[pos + 1..];
            if raw.is_empty() {
                Arg::flag(key)
            } else {
                Arg {
                    key: key.to_string(),
                    value: ArgValue::Value(unquote(raw).to_string()),
                }
            }
        }
    }
}

/// Remove one enclosing pair of matching quotes, if present.
fn unquote(raw: &str) -> &str {
    let mut chars = raw.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if first == last && is_quote(first) => &raw[1..raw.len() - 1],
        _ => raw,
    }
}
