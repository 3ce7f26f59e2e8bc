//! State shared by the gateway event handler and the expiry scheduler.
//!
//! `BotState` is created once at startup and cloned into the bot's event handler and the
//! scheduler job. Every field shares its data with its clones, so both schedules observe
//! the same credentials.

use crate::{
    data::{CredentialStore, MessageHistory},
    service::token::TokenGenerator,
};

#[derive(Clone, Default)]
pub struct BotState {
    /// Currently issued password per member.
    pub credentials: CredentialStore,

    /// Recent message contents per author.
    pub history: MessageHistory,

    /// Process-wide generator for password secrets.
    pub tokens: TokenGenerator,
}

impl BotState {
    pub fn new() -> Self {
        Self::default()
    }
}
