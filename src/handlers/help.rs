//! Built-in help command and help text rendering.
//!
//! `help` lists every command in registration order. `help <name>` shows the
//! explanation and example of one command, or the unknown-command reply
//! when `name` is not registered.

use super::core::{Command, CommandMessage, Documentation, Handler, HandlerResult, Response};
use crate::bot::Bot;
use crate::config::Config;
use crate::transport::EventSource;
use async_trait::async_trait;
use std::sync::{Arc, Weak};

/// Handler for the reserved help command.
///
/// Holds a weak reference so the bot's registry does not keep the bot alive.
pub struct HelpCommand<C: EventSource> {
    bot: Weak<Bot<C>>,
}

impl<C: EventSource> HelpCommand<C> {
    pub fn new(bot: Weak<Bot<C>>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl<C: EventSource> Handler<C, C::Message> for HelpCommand<C> {
    async fn handle(&self, message: CommandMessage<C::Message>, _client: Arc<C>) -> HandlerResult {
        let Some(bot) = self.bot.upgrade() else {
            return Ok(Response::Empty);
        };
        Ok(Response::Text(bot.help(message.arg(0))))
    }
}

/// Documentation registered with the help command itself.
pub fn help_documentation(config: &Config) -> Documentation {
    let docs = &config.bot_messages.help.documentation;
    Documentation::new()
        .description(docs.description.as_str())
        .explanation(docs.explanation.as_str())
        .example(format!("[{}]", docs.example_input), None)
}

/// One listing line: glyph, bold name and, if present, the description.
pub fn format_description(config: &Config, name: &str, description: Option<&str>) -> String {
    let messages = &config.bot_messages;
    let glyph = if name == messages.help.name.to_lowercase() {
        &messages.emoji.question
    } else {
        &messages.emoji.list
    };
    let name = config.text_formatting.bold(name);

    match description {
        Some(description) => format!("{glyph} {name}: {description}"),
        None => format!("{glyph} {name}"),
    }
}

/// Listing of every command, in the order given.
pub fn general_help<C, M>(config: &Config, commands: &[Arc<Command<C, M>>]) -> String {
    let mut lines = Vec::with_capacity(commands.len() + 1);
    lines.push(format!("{}:", config.bot_messages.help.message));
    lines.extend(
        commands
            .iter()
            .map(|command| format_description(config, command.name(), command.description())),
    );
    lines.join("\n")
}

/// Detailed help for a single command.
pub fn specific_help<C, M>(config: &Config, command: &Command<C, M>) -> String {
    let fmt = &config.text_formatting;
    let help = &config.bot_messages.help;
    let name = fmt.bold(command.name());

    let Some(docs) = command.documented() else {
        return help.without_documentation.render(&name);
    };

    let mut lines = Vec::with_capacity(2);
    if let Some(summary) = docs.summary() {
        lines.push(format!("{} {name}: {summary}.", config.bot_messages.emoji.question));
    }

    if let Some(example) = &docs.example {
        let invocation = fmt.bold(&format!("{}{}", config.symbol, command.name()));
        let mut line = format!("{}: {invocation}", help.example_text);
        if !example.input.is_empty() {
            line.push(' ');
            line.push_str(&example.input);
        }
        if let Some(output) = &example.output {
            line.push(' ');
            line.push_str(&fmt.bold("->"));
            line.push(' ');
            line.push_str(output);
        }
        lines.push(line);
    }

    lines.join("\n")
}
