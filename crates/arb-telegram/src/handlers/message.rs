use std::sync::Arc;

use teloxide::prelude::*;

use arb_core::{
    domain::{ChatId, MessageId, UserId},
    messaging::types::{InboundMessage, MessageContent},
};

use crate::router::AppState;

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(user) = msg.from() else {
        return Ok(());
    };

    let Some(content) = extract_content(&msg) else {
        // Stickers, documents and other payloads the bot does not relay.
        return Ok(());
    };

    let inbound = InboundMessage {
        chat_id: ChatId(msg.chat.id.0),
        user_id: UserId(user.id.0 as i64),
        message_id: MessageId(msg.id.0),
        reply_to: msg.reply_to_message().map(|m| MessageId(m.id.0)),
        content,
    };

    if let Err(e) = state.relay.handle_message(inbound).await {
        tracing::error!("message handling failed: {e}");
    }
    Ok(())
}

fn extract_content(msg: &Message) -> Option<MessageContent> {
    if let Some(text) = msg.text() {
        return Some(MessageContent::Text(text.to_string()));
    }

    if let Some(photos) = msg.photo() {
        // Telegram lists sizes smallest-first; forward the largest.
        let best = photos.last()?;
        return Some(MessageContent::Photo {
            file_id: best.file.id.clone(),
            caption: msg.caption().map(|s| s.to_string()),
        });
    }

    if let Some(voice) = msg.voice() {
        return Some(MessageContent::Voice {
            file_id: voice.file.id.clone(),
            caption: msg.caption().map(|s| s.to_string()),
        });
    }

    None
}
