//! Integration test common infrastructure.
//!
//! Provides an in-memory chat client for driving a bot and asserting on the
//! replies it sends.

pub mod client;

#[allow(unused_imports)]
pub use client::{Inbox, MockClient, MockMessage};

use bangcmd::{Bot, Config};
use std::sync::Arc;

/// Bot with default config on a fresh mock client.
#[allow(dead_code)]
pub fn bot() -> (Arc<Bot<MockClient>>, Inbox) {
    bot_with(Config::default())
}

/// Bot with `config` on a fresh mock client.
#[allow(dead_code)]
pub fn bot_with(config: Config) -> (Arc<Bot<MockClient>>, Inbox) {
    let (client, inbox) = MockClient::new();
    (Bot::new(client, config), inbox)
}
