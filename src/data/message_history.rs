use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Maximum number of messages retained per author.
pub const MESSAGE_HISTORY_CAP: usize = 50;

/// Recent message contents per author, capped to bound memory use.
///
/// Once an author reaches the cap, the oldest message is evicted for each new one.
#[derive(Clone)]
pub struct MessageHistory {
    messages: Arc<RwLock<HashMap<u64, VecDeque<String>>>>,
    cap: usize,
}

impl MessageHistory {
    pub fn new() -> Self {
        Self::with_capacity(MESSAGE_HISTORY_CAP)
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            messages: Arc::new(RwLock::new(HashMap::new())),
            cap,
        }
    }

    /// Appends a message to the author's history, evicting the oldest past the cap.
    pub async fn record(&self, author_id: u64, content: impl Into<String>) {
        if self.cap == 0 {
            return;
        }

        let mut messages = self.messages.write().await;
        let history = messages.entry(author_id).or_default();
        if history.len() >= self.cap {
            history.pop_front();
        }
        history.push_back(content.into());
    }

    /// Returns the author's retained messages, oldest first.
    pub async fn recent(&self, author_id: u64) -> Vec<String> {
        self.messages
            .read()
            .await
            .get(&author_id)
            .map(|history| history.iter().cloned().collect())
            .unwrap_or_default()
    }
}

impl Default for MessageHistory {
    fn default() -> Self {
        Self::new()
    }
}
