//! bangcmd-console - try a bot from the terminal.
//!
//! Every line read from stdin is delivered to the bot as a chat message and
//! replies are printed to stdout. Logs go to stderr.
//!
//! Usage: `bangcmd-console [config.toml]`
//!
//! Environment:
//! - `RUST_LOG` filters logs (default `info`)
//! - `BANGCMD_LOG_JSON` switches logs to JSON lines
//! - `BANGCMD_DUMP_METRICS` prints Prometheus metrics on exit

use async_trait::async_trait;
use bangcmd::error::HandlerError;
use bangcmd::transport::{Listener, ReadyListener};
use bangcmd::{Bot, CommandMessage, Config, Documentation, EventSource, ReplyableMessage};
use parking_lot::Mutex;
use rand::Rng;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

// ============================================================================
// Console transport
// ============================================================================

/// A line typed on the console.
struct ConsoleMessage {
    content: String,
    author: String,
    replies: mpsc::UnboundedSender<String>,
}

#[async_trait]
impl ReplyableMessage for ConsoleMessage {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "content" => Some(&self.content),
            "author" => Some(&self.author),
            _ => None,
        }
    }

    async fn reply(&self, text: String) -> anyhow::Result<()> {
        self.replies
            .send(text)
            .map_err(|_| anyhow::anyhow!("console output closed"))
    }
}

/// Stdin/stdout chat client.
struct ConsoleClient {
    author: String,
    listeners: Mutex<Vec<(String, Listener<ConsoleMessage>)>>,
    ready: Mutex<Vec<ReadyListener>>,
    replies: mpsc::UnboundedSender<String>,
}

impl ConsoleClient {
    fn new(replies: mpsc::UnboundedSender<String>) -> Self {
        Self {
            author: std::env::var("USER").unwrap_or_else(|_| "console".to_string()),
            listeners: Mutex::new(Vec::new()),
            ready: Mutex::new(Vec::new()),
            replies,
        }
    }

    fn emit_ready(&self) {
        let listeners = self.ready.lock().clone();
        for listener in listeners {
            listener();
        }
    }

    fn emit_line(&self, event: &str, line: String) {
        let listeners: Vec<_> = self
            .listeners
            .lock()
            .iter()
            .filter(|(name, _)| name == event)
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(ConsoleMessage {
                content: line.clone(),
                author: self.author.clone(),
                replies: self.replies.clone(),
            });
        }
    }
}

impl EventSource for ConsoleClient {
    type Message = ConsoleMessage;

    fn on(&self, event: &str, listener: Listener<ConsoleMessage>) {
        self.listeners.lock().push((event.to_string(), listener));
    }

    fn on_ready(&self, listener: ReadyListener) {
        self.ready.lock().push(listener);
    }
}

// ============================================================================
// Demo commands
// ============================================================================

fn register_commands(bot: &Bot<ConsoleClient>) {
    bot.add_sync_fn(
        "ping",
        |_message, _client| anyhow::Ok("pong"),
        Some(
            Documentation::new()
                .description("Checks that the bot is alive")
                .example("", Some("pong")),
        ),
    );

    bot.add_sync_fn(
        "echo",
        |message: CommandMessage<ConsoleMessage>, _client| anyhow::Ok(message.text.clone()),
        Some(
            Documentation::new()
                .description("Repeats what you say")
                .example("'hello world'", Some("hello world")),
        ),
    );

    bot.add_fn(
        "whoami",
        |message: CommandMessage<ConsoleMessage>, client: Arc<ConsoleClient>| async move {
            let author = message.message.field("author").unwrap_or(client.author.as_str());
            anyhow::Ok(format!("You are {author}"))
        },
        Some(Documentation::new().description("Tells you who you are")),
    );

    bot.add_sync_fn(
        "roll",
        roll,
        Some(
            Documentation::new()
                .description("Rolls a die")
                .explanation("Rolls a die with the given number of sides, six by default")
                .example("sides=20", Some("17")),
        ),
    );
}

fn roll(
    message: CommandMessage<ConsoleMessage>,
    _client: Arc<ConsoleClient>,
) -> anyhow::Result<u32> {
    let sides = match message.value("sides").or(message.arg(0)) {
        Some(raw) => raw
            .parse::<u32>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| HandlerError::InvalidArgument {
                key: "sides".to_string(),
                value: raw.to_string(),
            })?,
        None => 6,
    };

    Ok(rand::thread_rng().gen_range(1..=sides))
}

// ============================================================================
// Entry point
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);
    if std::env::var_os("BANGCMD_LOG_JSON").is_some() {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path).map_err(|e| {
            error!(path = %path, error = %e, "Failed to load config");
            e
        })?,
        None => Config::default(),
    };

    info!(
        symbol = %config.symbol,
        event = %config.message_event,
        "Starting bangcmd console"
    );

    bangcmd::metrics::init();

    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    let printer = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(reply) = rx.recv().await {
            let line = format!("{reply}\n");
            if stdout.write_all(line.as_bytes()).await.is_err() {
                break;
            }
            let _ = stdout.flush().await;
        }
    });

    let event = config.message_event.clone();
    let bot = Bot::new(ConsoleClient::new(tx), config);
    register_commands(&bot);
    bot.client().emit_ready();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        bot.client().emit_line(&event, line);
    }

    // Replies still in flight hold senders; the printer stops after the last one.
    drop(bot);
    printer.await?;

    if std::env::var_os("BANGCMD_DUMP_METRICS").is_some() {
        eprint!("{}", bangcmd::metrics::gather_metrics());
    }

    info!("Console closed");
    Ok(())
}
