//! Test factory for creating Serenity Role objects.

use serenity::all::Role;

/// Creates a test Serenity Role in a guild.
///
/// The role has no color, sits at position 1, is not hoisted, managed or mentionable
/// and grants no permissions. Only the ID, guild and name matter to the bot.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `guild_id` - Guild the role belongs to
/// - `name` - Role name, matched exactly by the authorization check
///
/// # Returns
/// - `Role` - A valid Serenity Role struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
pub fn create_test_role(role_id: u64, guild_id: u64, name: &str) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "guild_id": guild_id.to_string(),
        "name": name,
        "color": 0,
        "colors": {
            "primary_color": 0,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": 1,
        "permissions": "0",
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
