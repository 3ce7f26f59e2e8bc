//! In-memory stand-ins for the Discord seams, recording every call.

use serenity::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use super::{DirectMessenger, GuildDirectory};
use crate::{error::AppError, model::directory::DirectorySnapshot};

fn transport_error(what: &str) -> AppError {
    AppError::IoErr(std::io::Error::other(format!("mock {what} failure")))
}

/// Directory that resolves every channel to one guild snapshot.
pub struct MockDirectory {
    /// Guild returned for any channel; `None` behaves like a DM channel.
    pub channel_guild: Option<u64>,
    pub snapshot: DirectorySnapshot,
    pub fail_lookups: bool,
    pub guild_lookups: AtomicUsize,
}

impl MockDirectory {
    pub fn new(snapshot: DirectorySnapshot) -> Self {
        Self {
            channel_guild: Some(snapshot.guild_id),
            snapshot,
            fail_lookups: false,
            guild_lookups: AtomicUsize::new(0),
        }
    }

    pub fn guild_lookups(&self) -> usize {
        self.guild_lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GuildDirectory for MockDirectory {
    async fn resolve_channel_guild(&self, _channel_id: u64) -> Result<Option<u64>, AppError> {
        if self.fail_lookups {
            return Err(transport_error("channel lookup"));
        }
        Ok(self.channel_guild)
    }

    async fn resolve_guild(&self, _guild_id: u64) -> Result<DirectorySnapshot, AppError> {
        self.guild_lookups.fetch_add(1, Ordering::SeqCst);
        if self.fail_lookups {
            return Err(transport_error("guild lookup"));
        }
        Ok(self.snapshot.clone())
    }
}

/// Messenger that records DMs instead of sending them.
#[derive(Default)]
pub struct MockMessenger {
    pub sent: Mutex<Vec<(u64, String)>>,
    /// User IDs whose DMs fail, e.g. because they have DMs disabled.
    pub failing_users: Vec<u64>,
}

impl MockMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(users: &[u64]) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing_users: users.to_vec(),
        }
    }

    pub fn sent(&self) -> Vec<(u64, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl DirectMessenger for MockMessenger {
    async fn send_direct(&self, user_id: u64, text: &str) -> Result<(), AppError> {
        if self.failing_users.contains(&user_id) {
            return Err(transport_error("direct message"));
        }
        self.sent.lock().unwrap().push((user_id, text.to_string()));
        Ok(())
    }
}
