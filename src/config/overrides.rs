//! Partial configuration overrides.
//!
//! Every field is optional. Only the fields that are present replace the
//! corresponding default; nested tables may be given partially.
//!
//! ```toml
//! symbol = "?"
//!
//! [bot_messages.help]
//! name = "commands"
//!
//! [bot_messages.suggestion]
//! similarity = 0.4
//! ```
//!
//! Templates read from TOML are always literals. Formatter templates can
//! only be set from code.

use serde::Deserialize;

use super::template::Template;
use super::types::{
    BotMessages, Config, Emoji, HelpDocumentation, HelpMessages, SuggestionMessages,
    TextFormatting,
};

#[inline]
fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

#[inline]
fn set_template(slot: &mut Template, value: Option<String>) {
    set(slot, value.map(Template::Literal));
}

/// Top-level overrides for [`Config`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigOverrides {
    pub symbol: Option<String>,
    pub content_prop: Option<String>,
    pub message_event: Option<String>,
    pub text_formatting: Option<TextFormattingOverrides>,
    pub bot_messages: Option<BotMessagesOverrides>,
}

impl ConfigOverrides {
    /// Assign every present field onto `config`.
    pub fn apply(self, config: &mut Config) {
        set(&mut config.symbol, self.symbol);
        set(&mut config.content_prop, self.content_prop);
        set(&mut config.message_event, self.message_event);
        if let Some(formatting) = self.text_formatting {
            formatting.apply(&mut config.text_formatting);
        }
        if let Some(messages) = self.bot_messages {
            messages.apply(&mut config.bot_messages);
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextFormattingOverrides {
    pub bold: Option<String>,
    pub italic: Option<String>,
    pub underline: Option<String>,
    pub strikethrough: Option<String>,
    pub code: Option<String>,
}

impl TextFormattingOverrides {
    fn apply(self, target: &mut TextFormatting) {
        set(&mut target.bold, self.bold);
        set(&mut target.italic, self.italic);
        set(&mut target.underline, self.underline);
        set(&mut target.strikethrough, self.strikethrough);
        set(&mut target.code, self.code);
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BotMessagesOverrides {
    pub emoji: Option<EmojiOverrides>,
    pub error: Option<String>,
    pub help: Option<HelpOverrides>,
    pub suggestion: Option<SuggestionOverrides>,
}

impl BotMessagesOverrides {
    fn apply(self, target: &mut BotMessages) {
        if let Some(emoji) = self.emoji {
            emoji.apply(&mut target.emoji);
        }
        set(&mut target.error, self.error);
        if let Some(help) = self.help {
            help.apply(&mut target.help);
        }
        if let Some(suggestion) = self.suggestion {
            suggestion.apply(&mut target.suggestion);
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmojiOverrides {
    pub list: Option<String>,
    pub error: Option<String>,
    pub question: Option<String>,
}

impl EmojiOverrides {
    fn apply(self, target: &mut Emoji) {
        set(&mut target.list, self.list);
        set(&mut target.error, self.error);
        set(&mut target.question, self.question);
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HelpOverrides {
    pub name: Option<String>,
    pub message: Option<String>,
    pub documentation: Option<HelpDocumentationOverrides>,
    pub example_text: Option<String>,
    pub without_documentation: Option<String>,
}

impl HelpOverrides {
    fn apply(self, target: &mut HelpMessages) {
        set(&mut target.name, self.name);
        set(&mut target.message, self.message);
        if let Some(documentation) = self.documentation {
            documentation.apply(&mut target.documentation);
        }
        set(&mut target.example_text, self.example_text);
        set_template(&mut target.without_documentation, self.without_documentation);
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HelpDocumentationOverrides {
    pub description: Option<String>,
    pub explanation: Option<String>,
    pub example_input: Option<String>,
}

impl HelpDocumentationOverrides {
    fn apply(self, target: &mut HelpDocumentation) {
        set(&mut target.description, self.description);
        set(&mut target.explanation, self.explanation);
        set(&mut target.example_input, self.example_input);
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuggestionOverrides {
    pub similarity: Option<f64>,
    pub command_info: Option<String>,
    pub list_message: Option<String>,
    pub help_info: Option<String>,
}

impl SuggestionOverrides {
    fn apply(self, target: &mut SuggestionMessages) {
        set(&mut target.similarity, self.similarity);
        set_template(&mut target.command_info, self.command_info);
        set(&mut target.list_message, self.list_message);
        set_template(&mut target.help_info, self.help_info);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_overrides_change_nothing() {
        let mut config = Config::default();
        ConfigOverrides::default().apply(&mut config);
        assert_eq!(config.symbol, "!");
        assert_eq!(config.bot_messages.emoji, Emoji::default());
        assert_eq!(config.text_formatting, TextFormatting::default());
    }

    #[test]
    fn nested_partial_override() {
        let overrides: ConfigOverrides = toml::from_str(
            r#"
[bot_messages.help.documentation]
example_input = "name"

[bot_messages.emoji]
list = "-"
"#,
        )
        .unwrap();

        let mut config = Config::default();
        overrides.apply(&mut config);

        let help = &config.bot_messages.help;
        assert_eq!(help.documentation.example_input, "name");
        assert_eq!(help.documentation.description, "Gives information about every command");
        assert_eq!(help.name, "help");
        assert_eq!(config.bot_messages.emoji.list, "-");
        assert_eq!(config.bot_messages.emoji.error, "❌");
    }

    #[test]
    fn template_override_becomes_literal() {
        let overrides = ConfigOverrides {
            bot_messages: Some(BotMessagesOverrides {
                suggestion: Some(SuggestionOverrides {
                    help_info: Some("Ask for help".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let mut config = Config::default();
        overrides.apply(&mut config);
        let help_info = &config.bot_messages.suggestion.help_info;
        assert!(matches!(help_info, Template::Literal(_)));
        assert_eq!(help_info.render("**!help**"), "Ask for help");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<ConfigOverrides, _> = toml::from_str("prefix = \"!\"");
        assert!(result.is_err());
    }
}
