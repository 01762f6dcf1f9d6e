use std::sync::Arc;

use teloxide::prelude::*;

use arb_core::domain::{ChatId, MessageId, MessageRef, UserId};

use crate::router::AppState;

pub async fn handle_callback(q: CallbackQuery, state: Arc<AppState>) -> ResponseResult<()> {
    let user_id = UserId(q.from.id.0 as i64);
    let data = q.data.unwrap_or_default();
    let message = q.message.as_ref().map(|m| MessageRef {
        chat_id: ChatId(m.chat.id.0),
        message_id: MessageId(m.id.0),
    });

    if let Err(e) = state
        .relay
        .handle_callback(user_id, &q.id, &data, message)
        .await
    {
        tracing::error!("callback handling failed: {e}");
    }
    Ok(())
}
