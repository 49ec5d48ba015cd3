//! Core handler infrastructure.
//!
//! This module contains the fundamental types of the command system: the
//! [`Handler`] trait and the invocation types it works with, and the
//! [`Registry`] that maps command names to handlers.

pub mod context;
pub mod registry;

// Re-export commonly used types
pub use context::{CommandMessage, FnHandler, Handler, HandlerResult, Response, SyncFnHandler};
pub use registry::{Command, Documentation, Example, Registry};
