//! Core configuration types and loading.

use std::path::Path;
use thiserror::Error;

use super::defaults::*;
use super::overrides::ConfigOverrides;
use super::template::Template;
use super::validation::{ValidationError, validate};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {}", format_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Bot configuration.
///
/// Built once from [`Config::default`] plus optional overrides and never
/// mutated after the bot is constructed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix that marks a message as a command (e.g., "!").
    pub symbol: String,
    /// Name of the inbound message field holding the text.
    pub content_prop: String,
    /// Event the bot subscribes to for inbound messages.
    pub message_event: String,
    /// Decoration symbols used when rendering replies.
    pub text_formatting: TextFormatting,
    /// User-facing reply templates.
    pub bot_messages: BotMessages,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            content_prop: default_content_prop(),
            message_event: default_message_event(),
            text_formatting: TextFormatting::default(),
            bot_messages: BotMessages::default(),
        }
    }
}

impl Config {
    /// Load defaults overridden by a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse TOML overrides and apply them over the defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let overrides: ConfigOverrides = toml::from_str(content)?;
        Self::default().with_overrides(overrides)
    }

    /// Apply `overrides` field by field and validate the result.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        overrides.apply(&mut self);
        validate(&self).map_err(ConfigError::Invalid)?;
        Ok(self)
    }
}

/// Decoration symbol pairs. Each symbol opens and closes its decoration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFormatting {
    pub bold: String,
    pub italic: String,
    pub underline: String,
    pub strikethrough: String,
    pub code: String,
}

impl Default for TextFormatting {
    fn default() -> Self {
        Self {
            bold: default_bold(),
            italic: default_italic(),
            underline: default_underline(),
            strikethrough: default_strikethrough(),
            code: default_code(),
        }
    }
}

/// Reply templates grouped by the reply they build.
#[derive(Debug, Clone)]
pub struct BotMessages {
    pub emoji: Emoji,
    /// Generic text sent when a handler fails.
    pub error: String,
    pub help: HelpMessages,
    pub suggestion: SuggestionMessages,
}

impl Default for BotMessages {
    fn default() -> Self {
        Self {
            emoji: Emoji::default(),
            error: default_error_message(),
            help: HelpMessages::default(),
            suggestion: SuggestionMessages::default(),
        }
    }
}

/// Glyphs prefixed to reply lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emoji {
    pub list: String,
    pub error: String,
    pub question: String,
}

impl Default for Emoji {
    fn default() -> Self {
        Self {
            list: default_list_emoji(),
            error: default_error_emoji(),
            question: default_question_emoji(),
        }
    }
}

/// Help command configuration.
#[derive(Debug, Clone)]
pub struct HelpMessages {
    /// Reserved name of the built-in help command.
    pub name: String,
    /// Heading of the general command listing.
    pub message: String,
    pub documentation: HelpDocumentation,
    /// Label in front of a command's example invocation.
    pub example_text: String,
    /// Reply for commands registered without documentation.
    pub without_documentation: Template,
}

impl Default for HelpMessages {
    fn default() -> Self {
        Self {
            name: default_help_name(),
            message: default_help_message(),
            documentation: HelpDocumentation::default(),
            example_text: default_example_text(),
            without_documentation: default_without_documentation(),
        }
    }
}

/// Documentation attached to the built-in help command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpDocumentation {
    pub description: String,
    pub explanation: String,
    /// Shown in brackets after the help command in its example.
    pub example_input: String,
}

impl Default for HelpDocumentation {
    fn default() -> Self {
        Self {
            description: default_help_description(),
            explanation: default_help_explanation(),
            example_input: default_help_example_input(),
        }
    }
}

/// Unknown-command reply configuration.
#[derive(Debug, Clone)]
pub struct SuggestionMessages {
    /// Minimum similarity rating (0.0-1.0) for a command to be suggested.
    pub similarity: f64,
    /// Receives the bold unknown command name.
    pub command_info: Template,
    /// Heading above the suggested commands.
    pub list_message: String,
    /// Receives the bold help invocation (e.g., `**!help**`).
    pub help_info: Template,
}

impl Default for SuggestionMessages {
    fn default() -> Self {
        Self {
            similarity: DEFAULT_SIMILARITY,
            command_info: default_command_info(),
            list_message: default_list_message(),
            help_info: default_help_info(),
        }
    }
}
