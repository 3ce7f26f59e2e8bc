use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::model::credential::CredentialRecord;

/// Store of the currently issued password for each guild member.
///
/// Holds at most one record per subject. Records are never removed, so a member keeps
/// receiving expiry notices until they request a new password or the bot restarts.
#[derive(Clone, Default)]
pub struct CredentialStore {
    records: Arc<RwLock<HashMap<u64, CredentialRecord>>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a record, replacing any existing record for the same subject.
    ///
    /// # Arguments
    /// - `record` - The newly issued credential
    ///
    /// # Returns
    /// - `Some(CredentialRecord)` - The record that was replaced
    /// - `None` - The subject had no record yet
    pub async fn put(&self, record: CredentialRecord) -> Option<CredentialRecord> {
        self.records.write().await.insert(record.subject_id, record)
    }

    /// Returns a point-in-time copy of every stored record.
    ///
    /// The lock is released before returning so callers can perform slow work, such as
    /// sending Discord messages, without blocking new issuances.
    pub async fn scan(&self) -> Vec<CredentialRecord> {
        self.records.read().await.values().cloned().collect()
    }

    pub async fn get(&self, subject_id: u64) -> Option<CredentialRecord> {
        self.records.read().await.get(&subject_id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
