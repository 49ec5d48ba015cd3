//! Default values for bot configuration.
//!
//! Separated into its own module for clarity and reuse.

use super::template::Template;

// =============================================================================
// Transport Defaults
// =============================================================================

pub fn default_symbol() -> String {
    "!".to_string()
}

pub fn default_content_prop() -> String {
    "content".to_string()
}

pub fn default_message_event() -> String {
    "message".to_string()
}

// =============================================================================
// Text Formatting Defaults
// =============================================================================

pub fn default_bold() -> String {
    "**".to_string()
}

pub fn default_italic() -> String {
    "*".to_string()
}

pub fn default_underline() -> String {
    "__".to_string()
}

pub fn default_strikethrough() -> String {
    "~~".to_string()
}

pub fn default_code() -> String {
    "`".to_string()
}

// =============================================================================
// Emoji Defaults
// =============================================================================

pub fn default_list_emoji() -> String {
    "✅".to_string()
}

pub fn default_error_emoji() -> String {
    "❌".to_string()
}

pub fn default_question_emoji() -> String {
    "❓".to_string()
}

// =============================================================================
// Message Defaults
// =============================================================================

pub fn default_error_message() -> String {
    "There was an error processing your command".to_string()
}

pub fn default_help_name() -> String {
    "help".to_string()
}

pub fn default_help_message() -> String {
    "I can handle the following commands".to_string()
}

pub fn default_help_description() -> String {
    "Gives information about every command".to_string()
}

pub fn default_help_explanation() -> String {
    "Use this command followed by another command's name to get more info about it".to_string()
}

pub fn default_help_example_input() -> String {
    "command name".to_string()
}

pub fn default_example_text() -> String {
    "For example".to_string()
}

pub fn default_without_documentation() -> Template {
    Template::from("This command has no documentation")
}

// =============================================================================
// Suggestion Defaults
// =============================================================================

/// Minimum similarity rating for a command to be suggested.
pub const DEFAULT_SIMILARITY: f64 = 0.5;

pub fn default_command_info() -> Template {
    Template::formatter(|command| format!("{command} doesn't exist"))
}

pub fn default_list_message() -> String {
    "Maybe you meant".to_string()
}

pub fn default_help_info() -> Template {
    Template::formatter(|help| format!("Send {help} for more info"))
}
