//! Discord bot that issues short-lived passwords to staff members.
//!
//! When a guild owner or a member holding the `staff` role sends `felix password`, the bot
//! generates a random secret, remembers it for that member and sends it to them by DM.
//! A background job notifies members once their password is older than a minute. The
//! bot also serves a small static web page.
//!
//! # Architecture
//!
//! - **Bot** (`bot/`) - Serenity client setup and gateway event handlers
//! - **Service Layer** (`service/`) - Password issuance, authorization and secret generation
//! - **Data Layer** (`data/`) - In-memory credential store and message history
//! - **Model Layer** (`model/`) - Domain types converted from Serenity payloads
//! - **Scheduler** (`scheduler/`) - Cron job sweeping expired credentials
//! - **Router** (`router`) - Axum routes for the static web page
//! - **Error Layer** (`error/`) - Application error types
//!
//! Supporting modules: `config` (environment and argument parsing), `state` (shared
//! state), `startup` (tracing and listener setup).

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
