use std::sync::Arc;

use arb_core::{config::Config, store::RelayStore};
use arb_storage::SqliteStore;

mod health;

#[tokio::main]
async fn main() -> Result<(), arb_core::Error> {
    arb_core::logging::init("arb")?;

    let cfg = Arc::new(Config::load()?);

    let store: Arc<dyn RelayStore> = Arc::new(SqliteStore::connect(&cfg.database_path).await?);

    // Liveness probe for the hosting platform; independent of the bot path.
    tokio::spawn(health::serve(cfg.health_port));

    arb_telegram::router::run_polling(cfg, store)
        .await
        .map_err(|e| arb_core::Error::Delivery(format!("telegram bot failed: {e}")))?;

    Ok(())
}
