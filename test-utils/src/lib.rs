//! Motbot Test Utils
//!
//! Provides shared testing utilities for unit tests of the motbot crate. The bot's own
//! logic works on domain types, but the conversions from Serenity gateway payloads need
//! real Serenity structs; the factories here build them by deserializing JSON, the same
//! way Serenity builds them from Discord's API responses.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_role};
//!
//! let staff = create_test_role(200, 900, "staff");
//! let member = create_test_member(900, 10, "alice", &[200]);
//! ```

pub mod serenity;
