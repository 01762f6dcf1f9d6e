//! SQLite-backed persistence for the relay bot.
//!
//! Implements the `RelayStore` port from `arb-core` over a single sqlx pool.

mod sqlite_store;

pub use sqlite_store::SqliteStore;
