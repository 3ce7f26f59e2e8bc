//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity objects by deserializing JSON, simulating what
//! Discord's API would return, with sensible defaults for fields the bot never reads.
//!
//! # Available Factories
//!
//! - `member::create_test_member` - Create Serenity Member objects with assigned roles
//! - `message::create_test_message` - Create Serenity Message objects
//! - `role::create_test_role` - Create Serenity Role objects

pub mod member;
pub mod message;
pub mod role;
mod user;

// Re-export commonly used functions for convenience
pub use member::create_test_member;
pub use message::create_test_message;
pub use role::create_test_role;
