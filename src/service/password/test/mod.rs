use crate::{
    model::{
        directory::{DirectoryMember, DirectoryRole, DirectorySnapshot},
        message::InboundMessage,
    },
    service::{
        discord::mock::{MockDirectory, MockMessenger},
        password::{DispatchOutcome, PasswordService, PASSWORD_TRIGGER},
        token::SECRET_LENGTH,
    },
    state::BotState,
};


const GUILD_ID: u64 = 900;
const CHANNEL_ID: u64 = 500;
const OWNER_ID: u64 = 1;
const STAFF_ID: u64 = 10;
const MEMBER_ID: u64 = 11;
const STAFF_ROLE: u64 = 200;
const MEMBER_ROLE: u64 = 100;

/// Guild with an owner, one staff member and one regular member.
fn guild_snapshot() -> DirectorySnapshot {
    DirectorySnapshot {
        guild_id: GUILD_ID,
        owner_id: OWNER_ID,
        roles: vec![
            DirectoryRole {
                id: MEMBER_ROLE,
                name: "member".to_string(),
            },
            DirectoryRole {
                id: STAFF_ROLE,
                name: "staff".to_string(),
            },
        ],
        members: vec![
            DirectoryMember {
                user_id: OWNER_ID,
                role_ids: Vec::new(),
            },
            DirectoryMember {
                user_id: STAFF_ID,
                role_ids: vec![MEMBER_ROLE, STAFF_ROLE],
            },
            DirectoryMember {
                user_id: MEMBER_ID,
                role_ids: vec![MEMBER_ROLE],
            },
        ],
    }
}

fn message_from(author_id: u64, content: &str) -> InboundMessage {
    InboundMessage {
        author_id,
        author_name: format!("user{author_id}"),
        content: content.to_string(),
        channel_id: CHANNEL_ID,
        from_self: false,
    }
}

/// Pulls the secret out of a password DM.
fn secret_from_dm(text: &str) -> &str {
    text.rsplit(' ').next().unwrap_or_default()
}

fn is_lowercase_hex_secret(secret: &str) -> bool {
    secret.len() == SECRET_LENGTH
        && secret
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}
