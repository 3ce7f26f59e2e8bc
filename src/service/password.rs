use chrono::Utc;

use crate::{
    error::AppError,
    model::{credential::CredentialRecord, message::InboundMessage},
    service::{
        authorization::is_authorized,
        discord::{DirectMessenger, GuildDirectory},
    },
    state::BotState,
};

#[cfg(test)]
mod test;

/// Message content that triggers a password request.
pub const PASSWORD_TRIGGER: &str = "felix password";

/// What happened to an inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The bot authored the message itself.
    IgnoredSelf,
    /// The content was not the password trigger.
    IgnoredContent,
    /// The trigger was sent outside of a guild, e.g. in a DM.
    NotInGuild,
    /// The author is neither the guild owner nor a staff member.
    Unauthorized,
    /// A password was issued and sent to the author.
    Issued { subject_id: u64 },
}

/// Service handling password requests from chat messages.
pub struct PasswordService<'a> {
    state: &'a BotState,
    directory: &'a dyn GuildDirectory,
    messenger: &'a dyn DirectMessenger,
}

impl<'a> PasswordService<'a> {
    /// Creates a new PasswordService instance.
    ///
    /// # Arguments
    /// - `state` - Shared credential store, message history and token generator
    /// - `directory` - Guild lookups used for the authorization check
    /// - `messenger` - Used to DM the issued password
    pub fn new(
        state: &'a BotState,
        directory: &'a dyn GuildDirectory,
        messenger: &'a dyn DirectMessenger,
    ) -> Self {
        Self {
            state,
            directory,
            messenger,
        }
    }

    /// Handles a single inbound message.
    ///
    /// Every message not authored by the bot is recorded in the author's history. If the
    /// content is exactly [`PASSWORD_TRIGGER`], the author's guild is looked up and, when
    /// they are the owner or hold the staff role, a new password is generated, stored
    /// (replacing any previous one) and sent to them by DM.
    ///
    /// # Arguments
    /// - `message` - The inbound chat message
    ///
    /// # Returns
    /// - `Ok(DispatchOutcome)` - How the message was handled
    /// - `Err(AppError::DiscordErr)` - A guild lookup or the DM failed; the credential is
    ///   kept if the failure happened while sending the DM
    pub async fn handle(&self, message: &InboundMessage) -> Result<DispatchOutcome, AppError> {
        if message.from_self {
            return Ok(DispatchOutcome::IgnoredSelf);
        }

        self.state
            .history
            .record(message.author_id, message.content.as_str())
            .await;

        if message.content != PASSWORD_TRIGGER {
            return Ok(DispatchOutcome::IgnoredContent);
        }

        let Some(guild_id) = self
            .directory
            .resolve_channel_guild(message.channel_id)
            .await?
        else {
            return Ok(DispatchOutcome::NotInGuild);
        };

        let directory = self.directory.resolve_guild(guild_id).await?;

        if !is_authorized(&directory, message.author_id) {
            tracing::info!(
                "Denied password request from {} ({}) in guild {}",
                message.author_name,
                message.author_id,
                guild_id
            );
            return Ok(DispatchOutcome::Unauthorized);
        }

        let secret = self.state.tokens.generate();
        let record = CredentialRecord::new(
            message.author_id,
            message.author_name.as_str(),
            secret.clone(),
            Utc::now(),
        );
        let replaced = self.state.credentials.put(record).await;

        tracing::info!(
            "Issued password to {} ({}) in guild {}{}",
            message.author_name,
            message.author_id,
            guild_id,
            if replaced.is_some() {
                ", replacing previous password"
            } else {
                ""
            }
        );

        self.messenger
            .send_direct(message.author_id, &password_message(&secret))
            .await?;

        Ok(DispatchOutcome::Issued {
            subject_id: message.author_id,
        })
    }
}

/// Formats the DM carrying a newly issued password.
fn password_message(secret: &str) -> String {
    format!("Your new password is: {secret}")
}
