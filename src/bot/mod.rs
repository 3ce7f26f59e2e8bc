//! Discord bot integration for issuing passwords.
//!
//! The bot listens for messages in the guilds it has joined and, when a member sends the
//! password trigger, runs the password flow in `service::password`. The bot's HTTP client
//! is shared with the credential expiry scheduler so expiry notices go out through the
//! same connection.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability events
//! - `GUILD_MESSAGES` / `DIRECT_MESSAGES` - Receive message events
//! - `MESSAGE_CONTENT` - Read message content to detect the trigger (privileged intent)
//! - `GUILD_MEMBERS` - List guild members for the role check (privileged intent)
//!
//! Note: privileged intents must be explicitly enabled in the Discord Developer Portal
//! for the bot application.

pub mod handler;
pub mod start;
