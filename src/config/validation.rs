//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("symbol must not be empty")]
    EmptySymbol,
    #[error("content_prop must not be empty")]
    EmptyContentProp,
    #[error("message_event must not be empty")]
    EmptyMessageEvent,
    #[error("bot_messages.help.name must be a single word, got '{0}'")]
    InvalidHelpName(String),
    #[error("bot_messages.suggestion.similarity must be within 0.0..=1.0, got {0}")]
    SimilarityOutOfRange(f64),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.symbol.is_empty() {
        errors.push(ValidationError::EmptySymbol);
    }
    if config.content_prop.is_empty() {
        errors.push(ValidationError::EmptyContentProp);
    }
    if config.message_event.is_empty() {
        errors.push(ValidationError::EmptyMessageEvent);
    }

    // The help name is looked up as a single lowercased token
    let help_name = &config.bot_messages.help.name;
    if help_name.is_empty() || help_name.chars().any(char::is_whitespace) {
        errors.push(ValidationError::InvalidHelpName(help_name.clone()));
    }

    let similarity = config.bot_messages.suggestion.similarity;
    if !(0.0..=1.0).contains(&similarity) {
        errors.push(ValidationError::SimilarityOutOfRange(similarity));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
