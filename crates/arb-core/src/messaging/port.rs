use async_trait::async_trait;

use crate::{
    domain::{ChatId, MessageRef},
    messaging::types::InlineKeyboard,
    Result,
};

/// Cross-messenger port.
///
/// Telegram is the first implementation; the shape is narrow on purpose —
/// only the operations the relay actually performs.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_text(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<InlineKeyboard>,
    ) -> Result<MessageRef>;

    async fn send_photo(
        &self,
        chat_id: ChatId,
        file_id: &str,
        caption: &str,
        keyboard: Option<InlineKeyboard>,
    ) -> Result<MessageRef>;

    async fn send_voice(
        &self,
        chat_id: ChatId,
        file_id: &str,
        caption: &str,
        keyboard: Option<InlineKeyboard>,
    ) -> Result<MessageRef>;

    /// Send `text` as a visible reply to an earlier message.
    async fn reply_text(&self, to: MessageRef, text: &str) -> Result<MessageRef>;

    /// Strip the inline keyboard from a previously sent message.
    async fn remove_keyboard(&self, msg: MessageRef) -> Result<()>;

    /// Transient acknowledgment of a button press.
    async fn answer_callback(&self, callback_id: &str, text: Option<&str>) -> Result<()>;
}
