//! Domain models shared between the bot handlers, services and the expiry scheduler.
//!
//! Gateway payloads from Serenity are converted into these types at the handler
//! boundary so that the credential flow can be exercised without a live Discord
//! connection.

pub mod credential;
pub mod directory;
pub mod message;
