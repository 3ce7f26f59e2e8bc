//! Discord-facing seams used by the password flow.
//!
//! The password service and expiry scheduler talk to Discord only through the
//! [`GuildDirectory`] and [`DirectMessenger`] traits. [`DiscordGateway`] implements both
//! on top of Serenity's HTTP client.

use serenity::all::{ChannelId, CreateMessage, GuildId, Member, UserId};
use serenity::async_trait;
use serenity::http::Http;
use std::sync::Arc;

use crate::{error::AppError, model::directory::DirectorySnapshot};

#[cfg(test)]
pub mod mock;

/// Page size for the guild member list endpoint, which is Discord's maximum.
const MEMBER_PAGE_SIZE: u64 = 1000;

/// Read-only lookups of guild membership.
#[async_trait]
pub trait GuildDirectory: Send + Sync {
    /// Resolves the guild a channel belongs to.
    ///
    /// # Returns
    /// - `Ok(Some(guild_id))` - Channel is a guild channel
    /// - `Ok(None)` - Channel is a private (DM) channel
    /// - `Err(AppError)` - Lookup failed
    async fn resolve_channel_guild(&self, channel_id: u64) -> Result<Option<u64>, AppError>;

    /// Fetches a snapshot of a guild's owner, roles and members.
    async fn resolve_guild(&self, guild_id: u64) -> Result<DirectorySnapshot, AppError>;
}

/// Sends private messages to users.
#[async_trait]
pub trait DirectMessenger: Send + Sync {
    async fn send_direct(&self, user_id: u64, text: &str) -> Result<(), AppError>;
}

/// Serenity HTTP implementation of the Discord seams.
#[derive(Clone)]
pub struct DiscordGateway {
    http: Arc<Http>,
}

impl DiscordGateway {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Fetches every member of a guild, following pagination.
    ///
    /// Requires the `GUILD_MEMBERS` privileged intent to be enabled for the bot.
    async fn fetch_members(&self, guild_id: GuildId) -> Result<Vec<Member>, AppError> {
        let mut members = Vec::new();
        let mut after = None;

        loop {
            let page = self
                .http
                .get_guild_members(guild_id, Some(MEMBER_PAGE_SIZE), after)
                .await?;
            let page_len = page.len() as u64;
            after = page.last().map(|member| member.user.id.get());
            members.extend(page);

            if page_len < MEMBER_PAGE_SIZE || after.is_none() {
                break;
            }
        }

        tracing::debug!(
            "Fetched {} members from Discord API for guild {}",
            members.len(),
            guild_id
        );

        Ok(members)
    }
}

#[async_trait]
impl GuildDirectory for DiscordGateway {
    async fn resolve_channel_guild(&self, channel_id: u64) -> Result<Option<u64>, AppError> {
        let channel = self.http.get_channel(ChannelId::new(channel_id)).await?;

        Ok(channel.guild().map(|channel| channel.guild_id.get()))
    }

    async fn resolve_guild(&self, guild_id: u64) -> Result<DirectorySnapshot, AppError> {
        let guild = self.http.get_guild(GuildId::new(guild_id)).await?;
        let members = self.fetch_members(guild.id).await?;

        Ok(DirectorySnapshot::from_discord(
            guild.id,
            guild.owner_id,
            &guild.roles,
            &members,
        ))
    }
}

#[async_trait]
impl DirectMessenger for DiscordGateway {
    async fn send_direct(&self, user_id: u64, text: &str) -> Result<(), AppError> {
        let channel = UserId::new(user_id).create_dm_channel(&self.http).await?;
        channel
            .id
            .send_message(&self.http, CreateMessage::new().content(text))
            .await?;

        Ok(())
    }
}
