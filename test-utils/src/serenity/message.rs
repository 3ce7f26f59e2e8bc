//! Test factory for creating Serenity Message objects.

use serenity::all::Message;

use super::user::user_json;

/// Creates a test Serenity Message as received from the gateway.
///
/// The message is a plain default-type text message with no mentions, attachments or
/// embeds, sent in 2024.
///
/// # Arguments
/// - `message_id` - Discord message ID
/// - `channel_id` - Channel the message was sent in
/// - `author_id` - User ID of the author
/// - `author_name` - Username of the author
/// - `content` - Message text
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    author_id: u64,
    author_name: &str,
    content: &str,
) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "author": user_json(author_id, author_name),
        "content": content,
        "timestamp": "2024-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": [],
        "embeds": [],
        "pinned": false,
        "type": 0,
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
