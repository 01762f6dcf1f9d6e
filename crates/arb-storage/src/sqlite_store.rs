use std::path::Path;

use async_trait::async_trait;
use sqlx::{sqlite::SqliteConnectOptions, Row, SqlitePool};
use tracing::info;

use arb_core::{
    domain::{MessageId, UserId},
    store::RelayStore,
    Error, Result,
};

/// Single-file SQLite store; creates the database and schema if missing.
///
/// Each store operation is one self-contained statement, so SQLite's own
/// serialization is all the coordination the bot needs.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub async fn connect(path: &Path) -> Result<Self> {
        info!("opening relay database at {}", path.display());

        let options = SqliteConnectOptions::new()
            .create_if_missing(true)
            .filename(path);

        let pool = SqlitePool::connect_with(options).await.map_err(map_err)?;

        let store = Self { pool };
        store.init().await?;
        Ok(store)
    }

    async fn init(&self) -> Result<()> {
        sqlx::query("CREATE TABLE IF NOT EXISTS banned_users (user_id INTEGER PRIMARY KEY)")
            .execute(&self.pool)
            .await
            .map_err(map_err)?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS relayed_messages (
                relay_id INTEGER PRIMARY KEY AUTOINCREMENT,
                sender_id INTEGER NOT NULL,
                admin_msg_id INTEGER NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(map_err)?;

        sqlx::query("CREATE TABLE IF NOT EXISTS stats (key TEXT PRIMARY KEY, value INTEGER NOT NULL)")
            .execute(&self.pool)
            .await
            .map_err(map_err)?;

        // Seed row; keeps the increment a single UPDATE.
        sqlx::query("INSERT OR IGNORE INTO stats (key, value) VALUES ('total_messages', 0)")
            .execute(&self.pool)
            .await
            .map_err(map_err)?;

        Ok(())
    }
}

fn map_err(e: sqlx::Error) -> Error {
    Error::Storage(e.to_string())
}

#[async_trait]
impl RelayStore for SqliteStore {
    async fn is_banned(&self, user: UserId) -> Result<bool> {
        let row = sqlx::query("SELECT 1 FROM banned_users WHERE user_id = ?")
            .bind(user.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_err)?;
        Ok(row.is_some())
    }

    async fn ban(&self, user: UserId) -> Result<()> {
        sqlx::query("INSERT OR IGNORE INTO banned_users (user_id) VALUES (?)")
            .bind(user.0)
            .execute(&self.pool)
            .await
            .map_err(map_err)?;
        Ok(())
    }

    async fn record_relay(&self, sender: UserId, admin_msg: MessageId) -> Result<()> {
        sqlx::query("INSERT INTO relayed_messages (sender_id, admin_msg_id) VALUES (?, ?)")
            .bind(sender.0)
            .bind(admin_msg.0)
            .execute(&self.pool)
            .await
            .map_err(map_err)?;
        Ok(())
    }

    async fn lookup_sender(&self, admin_msg: MessageId) -> Result<Option<UserId>> {
        let row = sqlx::query(
            "SELECT sender_id FROM relayed_messages
             WHERE admin_msg_id = ?
             ORDER BY relay_id DESC
             LIMIT 1",
        )
        .bind(admin_msg.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_err)?;
        Ok(row.map(|r| UserId(r.get::<i64, _>(0))))
    }

    async fn increment_total_messages(&self) -> Result<()> {
        sqlx::query("UPDATE stats SET value = value + 1 WHERE key = 'total_messages'")
            .execute(&self.pool)
            .await
            .map_err(map_err)?;
        Ok(())
    }

    async fn total_messages(&self) -> Result<i64> {
        let row = sqlx::query("SELECT value FROM stats WHERE key = 'total_messages'")
            .fetch_one(&self.pool)
            .await
            .map_err(map_err)?;
        Ok(row.get::<i64, _>(0))
    }
}
