//! Core domain logic for the anonymous relay bot.
//!
//! This crate is intentionally framework-agnostic. Telegram and SQLite live
//! behind ports (traits) implemented in adapter crates.

pub mod callback;
pub mod config;
pub mod domain;
pub mod errors;
pub mod logging;
pub mod messaging;
pub mod moderation;
pub mod relay;
pub mod store;

pub use errors::{Error, Result};
