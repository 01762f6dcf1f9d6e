use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use arb_core::{
    config::Config, messaging::port::MessagingPort, moderation::ModerationGate, relay::Relay,
    store::RelayStore,
};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
}

/// Long-polling loop: builds the messenger + relay and dispatches updates
/// until the process is stopped.
pub async fn run_polling(cfg: Arc<Config>, store: Arc<dyn RelayStore>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.bot_token.clone());

    if let Ok(me) = bot.get_me().await {
        tracing::info!("relay bot started: @{}", me.username());
    }
    tracing::info!("relaying to admin {}", cfg.admin_id);

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let gate = ModerationGate::new(cfg.banned_words.clone());
    let relay = Arc::new(Relay::new(cfg.admin_id, gate, store, messenger));

    let state = Arc::new(AppState { relay });

    let handler = dptree::entry()
        .branch(Update::filter_callback_query().endpoint(handlers::handle_callback))
        .branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}
