//! Telegram update handlers.
//!
//! Each handler maps the teloxide update into the core inbound types and
//! hands it to the relay. Relay failures are logged here and never bubble
//! into the dispatcher.

use std::sync::Arc;

use teloxide::{
    prelude::*,
    types::{CallbackQuery, Message},
};

use crate::router::AppState;

mod callback;
mod commands;
mod message;

pub async fn handle_callback(q: CallbackQuery, state: Arc<AppState>) -> ResponseResult<()> {
    callback::handle_callback(q, state).await
}

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    if let Some(text) = msg.text() {
        if text.starts_with('/') {
            return commands::handle_command(msg, state).await;
        }
    }
    message::handle_message(msg, state).await
}
