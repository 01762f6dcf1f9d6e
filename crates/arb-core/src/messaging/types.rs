use crate::domain::{ChatId, MessageId, UserId};

/// Inbound non-command message, already detached from any platform-specific
/// update type.
#[derive(Clone, Debug)]
pub struct InboundMessage {
    pub chat_id: ChatId,
    pub user_id: UserId,
    pub message_id: MessageId,
    /// Set when this message replies to an earlier one in the same chat.
    pub reply_to: Option<MessageId>,
    pub content: MessageContent,
}

/// The payload kinds the bot relays.
#[derive(Clone, Debug)]
pub enum MessageContent {
    Text(String),
    Photo {
        file_id: String,
        caption: Option<String>,
    },
    Voice {
        file_id: String,
        caption: Option<String>,
    },
}

impl MessageContent {
    /// Text the word filter sees: the body for text messages, the caption
    /// (or nothing) for media.
    pub fn filter_text(&self) -> &str {
        match self {
            MessageContent::Text(text) => text,
            MessageContent::Photo { caption, .. } | MessageContent::Voice { caption, .. } => {
                caption.as_deref().unwrap_or("")
            }
        }
    }
}

/// Inline keyboard attached to a forwarded message.
#[derive(Clone, Debug)]
pub struct InlineKeyboard {
    pub buttons: Vec<InlineButton>,
}

#[derive(Clone, Debug)]
pub struct InlineButton {
    pub label: String,
    pub callback_data: String,
}

impl InlineKeyboard {
    /// One button on its own row.
    pub fn single(label: &str, callback_data: String) -> Self {
        Self {
            buttons: vec![InlineButton {
                label: label.to_string(),
                callback_data,
            }],
        }
    }
}
