//! Command handler trait and invocation types.
//!
//! A handler receives a [`CommandMessage`] (the inbound transport message
//! plus its parsed form) and the shared client, and returns a [`Response`].
//! Returning `Err` is how a handler signals failure; the dispatcher turns it
//! into the generic error reply and logs the cause.

use async_trait::async_trait;
use bangcmd_proto::ParsedMessage;
use std::future::Future;
use std::ops::Deref;
use std::sync::Arc;

/// Result type for command handlers.
pub type HandlerResult = anyhow::Result<Response>;

/// An inbound message together with the command parsed from it.
///
/// Dereferences to [`ParsedMessage`], so `msg.args`, `msg.text` and
/// `msg.value("key")` work directly.
pub struct CommandMessage<M> {
    /// The transport message that carried the command.
    pub message: Arc<M>,
    /// The parsed command.
    pub parsed: ParsedMessage,
}

impl<M> CommandMessage<M> {
    pub fn new(message: Arc<M>, parsed: ParsedMessage) -> Self {
        Self { message, parsed }
    }
}

impl<M> Clone for CommandMessage<M> {
    fn clone(&self) -> Self {
        Self {
            message: Arc::clone(&self.message),
            parsed: self.parsed.clone(),
        }
    }
}

impl<M> Deref for CommandMessage<M> {
    type Target = ParsedMessage;

    fn deref(&self) -> &ParsedMessage {
        &self.parsed
    }
}

/// What a handler produced.
///
/// Only numbers and text with non-whitespace content are sent; everything
/// else suppresses the reply. Integers keep their exact value; floats are
/// sent as `Infinity`, `-Infinity` or `NaN` when not finite.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Text(String),
    Integer(i64),
    Number(f64),
    Empty,
}

impl Response {
    /// The reply text, if this response should be sent.
    pub fn into_reply(self) -> Option<String> {
        match self {
            Self::Text(text) if !text.trim().is_empty() => Some(text),
            Self::Integer(n) => Some(n.to_string()),
            Self::Number(n) => Some(format_float(n)),
            Self::Text(_) | Self::Empty => None,
        }
    }
}

fn format_float(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        n.to_string()
    }
}

impl From<String> for Response {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for Response {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Option<String>> for Response {
    fn from(text: Option<String>) -> Self {
        text.map_or(Self::Empty, Self::Text)
    }
}

impl From<()> for Response {
    fn from(_: ()) -> Self {
        Self::Empty
    }
}

impl From<f64> for Response {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Response {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<u32> for Response {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<i64> for Response {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

/// Command handler.
///
/// `C` is the client passed opaquely to every invocation, `M` the inbound
/// message type.
#[async_trait]
pub trait Handler<C, M>: Send + Sync {
    /// Handle one invocation of the command.
    async fn handle(&self, message: CommandMessage<M>, client: Arc<C>) -> HandlerResult;
}

/// Adapter turning an async closure into a [`Handler`].
pub struct FnHandler<F>(pub F);

#[async_trait]
impl<C, M, F, Fut, R> Handler<C, M> for FnHandler<F>
where
    C: Send + Sync + 'static,
    M: Send + Sync + 'static,
    F: Fn(CommandMessage<M>, Arc<C>) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<R>> + Send + 'static,
    R: Into<Response> + Send + 'static,
{
    async fn handle(&self, message: CommandMessage<M>, client: Arc<C>) -> HandlerResult {
        (self.0)(message, client).await.map(Into::into)
    }
}

/// Adapter turning a plain closure into a [`Handler`].
pub struct SyncFnHandler<F>(pub F);

#[async_trait]
impl<C, M, F, R> Handler<C, M> for SyncFnHandler<F>
where
    C: Send + Sync + 'static,
    M: Send + Sync + 'static,
    F: Fn(CommandMessage<M>, Arc<C>) -> anyhow::Result<R> + Send + Sync,
    R: Into<Response> + 'static,
{
    async fn handle(&self, message: CommandMessage<M>, client: Arc<C>) -> HandlerResult {
        (self.0)(message, client).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_reply_requires_content() {
        assert_eq!(Response::from("pong").into_reply(), Some("pong".to_string()));
        assert_eq!(Response::from("  \n\t").into_reply(), None);
        assert_eq!(Response::from("").into_reply(), None);
    }

    #[test]
    fn text_reply_is_not_trimmed() {
        assert_eq!(Response::from("  hi ").into_reply(), Some("  hi ".to_string()));
    }

    #[test]
    fn numbers_are_stringified() {
        assert_eq!(Response::from(42).into_reply(), Some("42".to_string()));
        assert_eq!(Response::from(0).into_reply(), Some("0".to_string()));
        assert_eq!(Response::from(1.5).into_reply(), Some("1.5".to_string()));
        assert_eq!(Response::from(-3i64).into_reply(), Some("-3".to_string()));
    }

    #[test]
    fn integers_are_exact() {
        assert_eq!(
            Response::from(i64::MAX).into_reply(),
            Some("9223372036854775807".to_string())
        );
        assert_eq!(
            Response::from(9_007_199_254_740_993_i64).into_reply(),
            Some("9007199254740993".to_string())
        );
        assert_eq!(Response::from(u32::MAX), Response::Integer(4_294_967_295));
    }

    #[test]
    fn non_finite_floats() {
        assert_eq!(Response::from(f64::INFINITY).into_reply(), Some("Infinity".to_string()));
        assert_eq!(
            Response::from(f64::NEG_INFINITY).into_reply(),
            Some("-Infinity".to_string())
        );
        assert_eq!(Response::from(f64::NAN).into_reply(), Some("NaN".to_string()));
    }

    #[test]
    fn empty_responses_are_suppressed() {
        assert_eq!(Response::Empty.into_reply(), None);
        assert_eq!(Response::from(()).into_reply(), None);
        assert_eq!(Response::from(None::<String>).into_reply(), None);
    }

    #[tokio::test]
    async fn fn_handler_maps_output() {
        let handler = FnHandler(|msg: CommandMessage<()>, _client: Arc<()>| async move {
            anyhow::Ok(msg.text.len() as i64)
        });
        let parsed = ParsedMessage::parse("!", "!len abc").unwrap();
        let response = handler
            .handle(CommandMessage::new(Arc::new(()), parsed), Arc::new(()))
            .await
            .unwrap();
        assert_eq!(response, Response::Integer(3));
    }

    #[tokio::test]
    async fn sync_fn_handler_propagates_error() {
        let handler = SyncFnHandler(|_msg: CommandMessage<()>, _client: Arc<()>| {
            Err::<String, _>(anyhow::anyhow!("boom"))
        });
        let parsed = ParsedMessage::parse("!", "!fail").unwrap();
        let result = handler
            .handle(CommandMessage::new(Arc::new(()), parsed), Arc::new(()))
            .await;
        assert!(result.is_err());
    }
}
