//! Business logic for issuing passwords to authorized guild members.
//!
//! - `authorization` - Owner / staff role check against a guild snapshot
//! - `discord` - Traits for the Discord lookups and DMs the flow depends on
//! - `password` - Handles inbound messages and issues passwords
//! - `token` - Secret generation

pub mod authorization;
pub mod discord;
pub mod password;
pub mod token;
