//! In-memory stores shared between the gateway event handler and the expiry scheduler.
//!
//! Nothing here is persisted; all state is lost on restart. Each store is cheap to clone
//! and clones share the same underlying map behind a `tokio::sync::RwLock`.

pub mod credential;
pub mod message_history;

pub use credential::CredentialStore;
pub use message_history::MessageHistory;
