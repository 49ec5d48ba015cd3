//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Core config struct definitions (Config, TextFormatting, BotMessages)
//! - [`overrides`]: Partial TOML overrides applied field by field over the defaults
//! - [`template`]: Literal-or-formatter reply templates
//! - [`validation`]: Startup validation
//! - [`defaults`]: Default values

mod defaults;
mod overrides;
mod template;
mod types;
mod validation;

pub use defaults::DEFAULT_SIMILARITY;
pub use overrides::{
    BotMessagesOverrides, ConfigOverrides, EmojiOverrides, HelpDocumentationOverrides,
    HelpOverrides, SuggestionOverrides, TextFormattingOverrides,
};
pub use template::{FormatterFn, Template};
pub use types::{
    BotMessages, Config, ConfigError, Emoji, HelpDocumentation, HelpMessages, SuggestionMessages,
    TextFormatting,
};
pub use validation::{ValidationError, validate};
