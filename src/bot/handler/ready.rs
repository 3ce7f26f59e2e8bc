//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake.

use serenity::all::{ActivityData, Context, Ready};

/// Status shown under the bot's name in the member list.
const ACTIVITY: &str = "reading your messages";

/// Handles the ready event when the bot connects to Discord.
///
/// Logs the bot's user name and the number of guilds it is in, then sets the bot's
/// activity status.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user and guild information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord on {} servers",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::playing(ACTIVITY)));
}
