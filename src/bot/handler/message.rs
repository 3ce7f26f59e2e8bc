use serenity::all::{Context, Message};

use crate::{
    model::message::InboundMessage,
    service::{
        discord::DiscordGateway,
        password::{DispatchOutcome, PasswordService},
    },
    state::BotState,
};

/// Handle message creation in a channel
///
/// Runs the password flow for the message. Failures talking to Discord are logged and
/// the message is dropped; they never stop the bot.
pub async fn handle_message(state: &BotState, ctx: Context, message: Message) {
    let bot_id = ctx.cache.current_user().id;
    let inbound = InboundMessage::from_discord(&message, bot_id);

    let gateway = DiscordGateway::new(ctx.http.clone());
    let service = PasswordService::new(state, &gateway, &gateway);

    match service.handle(&inbound).await {
        Ok(DispatchOutcome::Issued { subject_id }) => {
            tracing::debug!("Sent password DM to {}", subject_id);
        }
        Ok(DispatchOutcome::NotInGuild) => {
            tracing::debug!(
                "Ignoring password request from {} outside of a guild",
                inbound.author_id
            );
        }
        Ok(_) => {}
        Err(e) => {
            tracing::error!(
                "Failed to handle message {} from {} in channel {}: {}",
                message.id,
                inbound.author_id,
                inbound.channel_id,
                e
            );
        }
    }
}
