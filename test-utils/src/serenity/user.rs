/// JSON body of a Discord user object for a regular (non-bot) account.
///
/// Shared by the factories of objects that embed a user, such as members and messages.
pub(crate) fn user_json(user_id: u64, username: &str) -> serde_json::Value {
    serde_json::json!({
        "id": user_id.to_string(),
        "username": username,
        "global_name": null,
        "avatar": null,
        "bot": false,
    })
}
