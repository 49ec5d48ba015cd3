//! The bot: command registration and message dispatch.
//!
//! Each inbound message goes through the same steps:
//!
//! 1. Read the configured content field; stop unless it starts with the symbol.
//! 2. Strip the symbol, tokenize and parse; stop if nothing is left.
//! 3. Look the command up.
//!    - Found: run the handler. Errors and panics are logged and replaced by
//!      the generic error reply.
//!    - Not found: reply with close matches and a pointer to help.
//! 4. Send the reply if it is a number or non-blank text.
//!
//! Nothing escapes this boundary: every path ends in silence or one reply.

use crate::config::Config;
use crate::error::{HandlerError, error_code};
use crate::format::Decoration;
use crate::handlers::help::{self, HelpCommand, help_documentation};
use crate::handlers::suggest;
use crate::handlers::{
    Command, CommandMessage, Documentation, FnHandler, Handler, Registry, Response,
    SyncFnHandler,
};
use crate::metrics;
use crate::telemetry::{CommandTimer, panic_message, spans};
use crate::transport::{EventSource, ReplyableMessage};
use bangcmd_proto::ParsedMessage;
use futures_util::FutureExt;
use parking_lot::RwLock;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{Instrument, debug, error, info, warn};

/// A registered command of bot `C`.
pub type BotCommand<C> = Command<C, <C as EventSource>::Message>;

/// Command bot bound to one client.
pub struct Bot<C: EventSource> {
    client: Arc<C>,
    config: Config,
    registry: RwLock<Registry<C, C::Message>>,
    /// Runtime current at construction, used for events fired off-runtime.
    runtime: Option<Handle>,
}

impl<C: EventSource> Bot<C> {
    /// Create a bot, register the help command and subscribe to the client.
    ///
    /// When called inside a Tokio runtime, that runtime also runs messages
    /// delivered from threads outside any runtime.
    pub fn new(client: C, config: Config) -> Arc<Self> {
        let bot = Arc::new_cyclic(|weak| {
            let mut registry: Registry<C, C::Message> = Registry::new();
            registry.register(
                &config.bot_messages.help.name,
                Arc::new(HelpCommand::new(weak.clone())),
                Some(help_documentation(&config)),
            );

            Self {
                client: Arc::new(client),
                config,
                registry: RwLock::new(registry),
                runtime: Handle::try_current().ok(),
            }
        });

        bot.subscribe();
        bot
    }

    fn subscribe(self: &Arc<Self>) {
        let weak = Arc::downgrade(self);
        self.client.on(
            &self.config.message_event,
            Arc::new(move |message: C::Message| {
                let Some(bot) = weak.upgrade() else {
                    return;
                };
                let runtime = Handle::try_current().ok().or_else(|| bot.runtime.clone());
                match runtime {
                    Some(runtime) => {
                        runtime.spawn(async move {
                            bot.handle_message(message).await;
                        });
                    }
                    None => warn!("Message event fired outside a Tokio runtime, dropping"),
                }
            }),
        );

        self.client.on_ready(Arc::new(|| info!("The client is ready!")));

        debug!(
            event = %self.config.message_event,
            symbol = %self.config.symbol,
            "Subscribed to message events"
        );
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register `handler` under `name` (case-insensitive).
    ///
    /// Returns false and keeps the existing command if the name is taken,
    /// including the reserved help command name.
    pub fn add_command<H>(
        &self,
        name: &str,
        handler: H,
        documentation: Option<Documentation>,
    ) -> bool
    where
        H: Handler<C, C::Message> + 'static,
    {
        self.registry
            .write()
            .register(name, Arc::new(handler), documentation)
    }

    /// Register an async closure as a command.
    pub fn add_fn<F, Fut, R>(&self, name: &str, f: F, documentation: Option<Documentation>) -> bool
    where
        F: Fn(CommandMessage<C::Message>, Arc<C>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<R>> + Send + 'static,
        R: Into<Response> + Send + 'static,
    {
        self.add_command(name, FnHandler(f), documentation)
    }

    /// Register a synchronous closure as a command.
    pub fn add_sync_fn<F, R>(&self, name: &str, f: F, documentation: Option<Documentation>) -> bool
    where
        F: Fn(CommandMessage<C::Message>, Arc<C>) -> anyhow::Result<R> + Send + Sync + 'static,
        R: Into<Response> + 'static,
    {
        self.add_command(name, SyncFnHandler(f), documentation)
    }

    /// Look up a command by name, ignoring case.
    pub fn get_command(&self, name: &str) -> Option<Arc<BotCommand<C>>> {
        self.registry.read().lookup(name)
    }

    /// All commands in registration order.
    pub fn get_commands(&self) -> Vec<Arc<BotCommand<C>>> {
        self.registry.read().commands()
    }

    /// All command names in registration order.
    pub fn command_names(&self) -> Vec<String> {
        self.registry.read().names()
    }

    pub fn client(&self) -> &Arc<C> {
        &self.client
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Dispatch one inbound message.
    ///
    /// Returns the reply decided for the message, or `None` when the message
    /// was not a command or the handler produced nothing to send. A failure
    /// to deliver the reply is logged, not returned.
    pub async fn handle_message(&self, message: C::Message) -> Option<String> {
        let message = Arc::new(message);
        let parsed = {
            let content = message.field(&self.config.content_prop)?;
            ParsedMessage::parse(&self.config.symbol, content)?
        };

        let response = match self.get_command(&parsed.command) {
            Some(command) => {
                let invocation = CommandMessage::new(Arc::clone(&message), parsed);
                self.invoke(&command, invocation).await
            }
            None => {
                debug!(command = %parsed.command, "Unknown command");
                metrics::record_unknown_command();
                Response::Text(self.similar_commands_message(&parsed.command))
            }
        };

        let reply = response.into_reply()?;
        if let Err(e) = message.reply(reply.clone()).await {
            warn!(error = %e, "Failed to send reply");
        }
        Some(reply)
    }

    async fn invoke(
        &self,
        command: &BotCommand<C>,
        invocation: CommandMessage<C::Message>,
    ) -> Response {
        let name = command.name();
        let span = spans::command(name, invocation.args.len());
        let _timer = CommandTimer::new(name);

        let call = command
            .handler()
            .handle(invocation, Arc::clone(&self.client));

        match AssertUnwindSafe(call).catch_unwind().instrument(span).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                error!(command = %name, error = ?e, "Command handler failed");
                metrics::record_command_error(name, error_code(&e));
                Response::Text(self.error_message())
            }
            Err(payload) => {
                let panic = HandlerError::Panicked(panic_message(&*payload).to_string());
                error!(command = %name, error = %panic, "Command handler panicked");
                metrics::record_command_error(name, panic.error_code());
                Response::Text(self.error_message())
            }
        }
    }

    // ========================================================================
    // Replies
    // ========================================================================

    /// Generic reply sent in place of a failed handler's response.
    pub fn error_message(&self) -> String {
        let messages = &self.config.bot_messages;
        format!("{} {}.", messages.emoji.error, messages.error)
    }

    /// Reply for an unknown command: close matches plus a pointer to help.
    pub fn similar_commands_message(&self, name: &str) -> String {
        let fmt = &self.config.text_formatting;
        let messages = &self.config.bot_messages;
        let suggestion = &messages.suggestion;

        let names = self.command_names();
        let similar = suggest::suggest(name, &names, suggestion.similarity);

        let mut message = format!(
            "{} {}.",
            messages.emoji.error,
            suggestion.command_info.render(&fmt.bold(name))
        );

        if !similar.is_empty() {
            let list = similar
                .iter()
                .map(|command| format!("{} {}", messages.emoji.list, fmt.bold(command)))
                .collect::<Vec<_>>()
                .join("\n");
            message.push_str(&format!("\n\n{}:\n{list}", suggestion.list_message));
        }

        let help_call = fmt.bold(&format!(
            "{}{}",
            self.config.symbol,
            messages.help.name.to_lowercase()
        ));
        message.push_str(&format!(
            "\n\n{} {}.",
            messages.emoji.question,
            suggestion.help_info.render(&help_call)
        ));

        message
    }

    /// Help text: the general listing, or details for `command`.
    pub fn help(&self, command: Option<&str>) -> String {
        let Some(name) = command else {
            return help::general_help(&self.config, &self.get_commands());
        };

        let name = name.to_lowercase();
        match self.get_command(&name) {
            Some(command) => help::specific_help(&self.config, &command),
            None => self.similar_commands_message(&name),
        }
    }

    // ========================================================================
    // Text decoration
    // ========================================================================

    pub fn format_text(&self, text: &str, decorations: &[Decoration]) -> String {
        self.config.text_formatting.format_text(text, decorations)
    }

    pub fn bold_text(&self, text: &str) -> String {
        self.config.text_formatting.bold(text)
    }

    pub fn italic_text(&self, text: &str) -> String {
        self.config.text_formatting.italic(text)
    }

    pub fn underline_text(&self, text: &str) -> String {
        self.config.text_formatting.underline(text)
    }

    pub fn strikethrough_text(&self, text: &str) -> String {
        self.config.text_formatting.strikethrough(text)
    }

    pub fn code_text(&self, text: &str) -> String {
        self.config.text_formatting.code(text)
    }
}
