use chrono::{DateTime, Duration, Utc};

/// An issued password tracked for a single guild member.
///
/// At most one record exists per `subject_id`; issuing a new password replaces the
/// previous record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    /// Discord user ID of the member the password was issued to.
    pub subject_id: u64,
    /// Username at the time of issuance, used in log output.
    pub display_name: String,
    /// 64-character lowercase hexadecimal secret.
    pub secret: String,
    /// When the secret was issued.
    pub issued_at: DateTime<Utc>,
}

impl CredentialRecord {
    pub fn new(
        subject_id: u64,
        display_name: impl Into<String>,
        secret: String,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            subject_id,
            display_name: display_name.into(),
            secret,
            issued_at,
        }
    }

    /// Time elapsed since issuance as of `now`.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.issued_at)
    }

    /// Returns `true` once the record is strictly older than `threshold`.
    pub fn is_expired(&self, now: DateTime<Utc>, threshold: Duration) -> bool {
        self.age(now) > threshold
    }
}
