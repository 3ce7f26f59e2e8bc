use serenity::all::{Message, UserId};

/// The parts of a gateway message the password flow cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub author_id: u64,
    pub author_name: String,
    pub content: String,
    pub channel_id: u64,
    /// Whether the bot itself authored the message.
    pub from_self: bool,
}

impl InboundMessage {
    /// Extracts an inbound message from a Serenity message.
    ///
    /// # Arguments
    /// - `message` - Message received from the gateway
    /// - `bot_id` - The bot's own user ID, used to flag self-authored messages
    pub fn from_discord(message: &Message, bot_id: UserId) -> Self {
        Self {
            author_id: message.author.id.get(),
            author_name: message.author.name.clone(),
            content: message.content.clone(),
            channel_id: message.channel_id.get(),
            from_self: message.author.id == bot_id,
        }
    }
}
