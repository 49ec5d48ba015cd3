//! Collaborator traits for chat transports.
//!
//! The bot never talks to a network itself. A transport hands it inbound
//! messages through [`EventSource`] and the bot answers through
//! [`ReplyableMessage::reply`].

use async_trait::async_trait;
use std::sync::Arc;

/// Callback invoked with each inbound message of a subscribed event.
pub type Listener<M> = Arc<dyn Fn(M) + Send + Sync>;

/// Callback invoked once the transport is ready.
pub type ReadyListener = Arc<dyn Fn() + Send + Sync>;

/// A client that emits named events.
///
/// Implementations call listeners from within a Tokio runtime; the bot
/// spawns one task per inbound message.
pub trait EventSource: Send + Sync + 'static {
    /// Inbound message type delivered with the message event.
    type Message: ReplyableMessage;

    /// Subscribe `listener` to `event` (e.g., "message").
    fn on(&self, event: &str, listener: Listener<Self::Message>);

    /// Subscribe `listener` to the transport's ready event.
    fn on_ready(&self, listener: ReadyListener);
}

/// An inbound message that carries text fields and can be answered.
#[async_trait]
pub trait ReplyableMessage: Send + Sync + 'static {
    /// Value of the named text field, if the message has one.
    fn field(&self, name: &str) -> Option<&str>;

    /// Send `text` back to wherever the message came from.
    async fn reply(&self, text: String) -> anyhow::Result<()>;
}
