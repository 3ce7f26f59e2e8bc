//! Recurring background jobs.
//!
//! - `credential_expiry` - Notifies members whose password is older than the expiry threshold

pub mod credential_expiry;
