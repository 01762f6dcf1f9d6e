//! Telegram adapter (teloxide).
//!
//! This crate implements the `arb-core` MessagingPort over the Telegram Bot API.

use async_trait::async_trait;

use teloxide::{
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup, InputFile},
};

pub mod handlers;
pub mod router;

use arb_core::{
    domain::{ChatId, MessageId, MessageRef},
    errors::Error,
    messaging::{port::MessagingPort, types::InlineKeyboard},
    Result,
};

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    fn tg_msg_id(message_id: MessageId) -> teloxide::types::MessageId {
        teloxide::types::MessageId(message_id.0)
    }

    fn map_err(e: teloxide::RequestError) -> Error {
        Error::Delivery(format!("telegram error: {e}"))
    }

    fn markup(keyboard: InlineKeyboard) -> InlineKeyboardMarkup {
        let rows = keyboard
            .buttons
            .into_iter()
            .map(|b| vec![InlineKeyboardButton::callback(b.label, b.callback_data)])
            .collect::<Vec<_>>();
        InlineKeyboardMarkup::new(rows)
    }

    fn msg_ref(msg: &teloxide::types::Message) -> MessageRef {
        MessageRef {
            chat_id: ChatId(msg.chat.id.0),
            message_id: MessageId(msg.id.0),
        }
    }
}

#[async_trait]
impl MessagingPort for TelegramMessenger {
    async fn send_text(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<InlineKeyboard>,
    ) -> Result<MessageRef> {
        let mut req = self.bot.send_message(Self::tg_chat(chat_id), text);
        if let Some(kb) = keyboard {
            req = req.reply_markup(Self::markup(kb));
        }
        let msg = req.await.map_err(Self::map_err)?;
        Ok(Self::msg_ref(&msg))
    }

    async fn send_photo(
        &self,
        chat_id: ChatId,
        file_id: &str,
        caption: &str,
        keyboard: Option<InlineKeyboard>,
    ) -> Result<MessageRef> {
        let mut req = self
            .bot
            .send_photo(Self::tg_chat(chat_id), InputFile::file_id(file_id))
            .caption(caption);
        if let Some(kb) = keyboard {
            req = req.reply_markup(Self::markup(kb));
        }
        let msg = req.await.map_err(Self::map_err)?;
        Ok(Self::msg_ref(&msg))
    }

    async fn send_voice(
        &self,
        chat_id: ChatId,
        file_id: &str,
        caption: &str,
        keyboard: Option<InlineKeyboard>,
    ) -> Result<MessageRef> {
        let mut req = self
            .bot
            .send_voice(Self::tg_chat(chat_id), InputFile::file_id(file_id))
            .caption(caption);
        if let Some(kb) = keyboard {
            req = req.reply_markup(Self::markup(kb));
        }
        let msg = req.await.map_err(Self::map_err)?;
        Ok(Self::msg_ref(&msg))
    }

    async fn reply_text(&self, to: MessageRef, text: &str) -> Result<MessageRef> {
        let msg = self
            .bot
            .send_message(Self::tg_chat(to.chat_id), text)
            .reply_to_message_id(Self::tg_msg_id(to.message_id))
            .await
            .map_err(Self::map_err)?;
        Ok(Self::msg_ref(&msg))
    }

    async fn remove_keyboard(&self, msg: MessageRef) -> Result<()> {
        // Editing the markup without supplying one clears it.
        self.bot
            .edit_message_reply_markup(Self::tg_chat(msg.chat_id), Self::tg_msg_id(msg.message_id))
            .await
            .map_err(Self::map_err)?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str, text: Option<&str>) -> Result<()> {
        let mut req = self.bot.answer_callback_query(callback_id);
        if let Some(text) = text {
            req = req.text(text);
        }
        req.await.map_err(Self::map_err)?;
        Ok(())
    }
}
