//! Mock chat client.
//!
//! `MockClient` records listeners the way a real transport would and lets a
//! test fire events at them. Replies from every message it creates land in
//! one shared [`Inbox`].

use async_trait::async_trait;
use bangcmd::transport::{Listener, ReadyListener};
use bangcmd::{EventSource, ReplyableMessage};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::timeout;

/// Inbound test message with arbitrary text fields.
#[derive(Clone)]
pub struct MockMessage {
    fields: HashMap<String, String>,
    replies: mpsc::UnboundedSender<String>,
    fail_replies: bool,
}

impl MockMessage {
    /// Set a field, replacing any previous value.
    #[allow(dead_code)]
    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.fields.insert(name.to_string(), value.to_string());
        self
    }

    /// Remove a field.
    #[allow(dead_code)]
    pub fn without_field(mut self, name: &str) -> Self {
        self.fields.remove(name);
        self
    }

    /// Make `reply` fail instead of delivering.
    #[allow(dead_code)]
    pub fn failing(mut self) -> Self {
        self.fail_replies = true;
        self
    }
}

#[async_trait]
impl ReplyableMessage for MockMessage {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    async fn reply(&self, text: String) -> anyhow::Result<()> {
        if self.fail_replies {
            anyhow::bail!("channel is read-only");
        }
        self.replies
            .send(text)
            .map_err(|_| anyhow::anyhow!("inbox dropped"))
    }
}

/// In-memory client.
pub struct MockClient {
    listeners: Mutex<Vec<(String, Listener<MockMessage>)>>,
    ready: Mutex<Vec<ReadyListener>>,
    replies: mpsc::UnboundedSender<String>,
    /// Number of times handlers touched the client.
    pub calls: AtomicUsize,
}

impl MockClient {
    pub fn new() -> (Self, Inbox) {
        let (tx, rx) = mpsc::unbounded_channel();
        let client = Self {
            listeners: Mutex::new(Vec::new()),
            ready: Mutex::new(Vec::new()),
            replies: tx,
            calls: AtomicUsize::new(0),
        };
        (client, Inbox { rx })
    }

    /// A message whose `content` field is `content`.
    pub fn message(&self, content: &str) -> MockMessage {
        MockMessage {
            fields: HashMap::from([("content".to_string(), content.to_string())]),
            replies: self.replies.clone(),
            fail_replies: false,
        }
    }

    /// Deliver `message` to every listener of `event`.
    #[allow(dead_code)]
    pub fn emit(&self, event: &str, message: MockMessage) {
        let listeners: Vec<_> = self
            .listeners
            .lock()
            .iter()
            .filter(|(name, _)| name == event)
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(message.clone());
        }
    }

    /// Fire the ready event.
    #[allow(dead_code)]
    pub fn emit_ready(&self) {
        let listeners = self.ready.lock().clone();
        for listener in listeners {
            listener();
        }
    }

    /// Events that have at least one listener.
    #[allow(dead_code)]
    pub fn subscribed_events(&self) -> Vec<String> {
        self.listeners
            .lock()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    #[allow(dead_code)]
    pub fn ready_listeners(&self) -> usize {
        self.ready.lock().len()
    }

    #[allow(dead_code)]
    pub fn touch(&self) -> usize {
        self.calls.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl EventSource for MockClient {
    type Message = MockMessage;

    fn on(&self, event: &str, listener: Listener<MockMessage>) {
        self.listeners.lock().push((event.to_string(), listener));
    }

    fn on_ready(&self, listener: ReadyListener) {
        self.ready.lock().push(listener);
    }
}

/// Replies sent through any message of a [`MockClient`].
pub struct Inbox {
    rx: mpsc::UnboundedReceiver<String>,
}

impl Inbox {
    /// Wait up to five seconds for the next reply.
    #[allow(dead_code)]
    pub async fn recv(&mut self) -> anyhow::Result<String> {
        self.recv_timeout(Duration::from_secs(5)).await
    }

    /// Wait up to `dur` for the next reply.
    pub async fn recv_timeout(&mut self, dur: Duration) -> anyhow::Result<String> {
        timeout(dur, self.rx.recv())
            .await?
            .ok_or_else(|| anyhow::anyhow!("reply channel closed"))
    }

    /// The next reply if one is already waiting.
    #[allow(dead_code)]
    pub fn try_recv(&mut self) -> Option<String> {
        self.rx.try_recv().ok()
    }
}
