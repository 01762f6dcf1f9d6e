use std::sync::Arc;

use tracing::{error, warn};

use crate::{
    callback::CallbackAction,
    domain::{ChatId, MessageRef, UserId},
    messaging::{
        port::MessagingPort,
        types::{InboundMessage, InlineKeyboard, MessageContent},
    },
    moderation::{Decision, ModerationGate},
    store::RelayStore,
    Result,
};

const WELCOME: &str = "🤫 Welcome to the anonymous relay bot.\n\
Send your message and it will reach the admin in full confidence.";
const BANNED_NOTICE: &str = "🚫 You are banned from using this bot.";
const FILTERED_NOTICE: &str = "❌ Your message contains prohibited words and was not sent.";
const SENT_CONFIRMATION: &str = "✅ Your message was sent anonymously.";
const FORWARD_HEADER: &str = "📩 New message:";
const BAN_BUTTON_LABEL: &str = "Ban user 🚫";
const REPLY_HEADER: &str = "📩 Reply from the admin:";
const REPLY_DELIVERED: &str = "✅ Reply delivered.";
const REPLY_FAILED: &str = "❌ Delivery failed (the user may have blocked the bot).";
const BAN_ACK: &str = "🚫 User banned";

/// The message router plus the admin actions built on top of it.
///
/// Holds no state of its own beyond the configured admin identity; everything
/// durable is delegated to the store.
pub struct Relay {
    admin_id: UserId,
    admin_chat: ChatId,
    gate: ModerationGate,
    store: Arc<dyn RelayStore>,
    messenger: Arc<dyn MessagingPort>,
}

impl Relay {
    pub fn new(
        admin_id: i64,
        gate: ModerationGate,
        store: Arc<dyn RelayStore>,
        messenger: Arc<dyn MessagingPort>,
    ) -> Self {
        Self {
            admin_id: UserId(admin_id),
            admin_chat: ChatId(admin_id),
            gate,
            store,
            messenger,
        }
    }

    /// One inbound non-command message.
    ///
    /// The admin-reply check runs before the ban check and the word filter:
    /// the admin is exempt from both while routing a reply, but if the lookup
    /// misses (reply to something that was never forwarded) control falls
    /// through and the admin's message is handled like anyone else's.
    pub async fn handle_message(&self, msg: InboundMessage) -> Result<()> {
        if msg.user_id == self.admin_id {
            if let Some(replied) = msg.reply_to {
                if let Some(target) = self.store.lookup_sender(replied).await? {
                    return self.reply_to_sender(&msg, target).await;
                }
            }
        }

        let banned = self.store.is_banned(msg.user_id).await?;
        match self.gate.decide(banned, msg.content.filter_text()) {
            Decision::Banned => {
                self.messenger
                    .send_text(msg.chat_id, BANNED_NOTICE, None)
                    .await?;
                Ok(())
            }
            Decision::Filtered => {
                self.messenger
                    .send_text(msg.chat_id, FILTERED_NOTICE, None)
                    .await?;
                Ok(())
            }
            Decision::Allowed => self.forward_to_admin(&msg).await,
        }
    }

    async fn forward_to_admin(&self, msg: &InboundMessage) -> Result<()> {
        if let MessageContent::Text(text) = &msg.content {
            if text.trim().is_empty() {
                return Ok(());
            }
        }

        let keyboard = InlineKeyboard::single(
            BAN_BUTTON_LABEL,
            CallbackAction::Ban {
                user_id: msg.user_id,
            }
            .encode(),
        );

        let sent = match &msg.content {
            MessageContent::Text(text) => {
                self.messenger
                    .send_text(
                        self.admin_chat,
                        &format!("{FORWARD_HEADER}\n\n{text}"),
                        Some(keyboard),
                    )
                    .await
            }
            MessageContent::Photo { file_id, caption } => {
                self.messenger
                    .send_photo(
                        self.admin_chat,
                        file_id,
                        &forward_caption(caption.as_deref()),
                        Some(keyboard),
                    )
                    .await
            }
            MessageContent::Voice { file_id, caption } => {
                self.messenger
                    .send_voice(
                        self.admin_chat,
                        file_id,
                        &forward_caption(caption.as_deref()),
                        Some(keyboard),
                    )
                    .await
            }
        };

        let delivered = match sent {
            Ok(m) => m,
            Err(e) => {
                // The sender gets nothing on a failed forward; the failure is
                // visible in the logs only.
                error!("forward to admin failed: {e}");
                return Ok(());
            }
        };

        self.store
            .record_relay(msg.user_id, delivered.message_id)
            .await?;
        self.store.increment_total_messages().await?;

        self.messenger
            .send_text(msg.chat_id, SENT_CONFIRMATION, None)
            .await?;
        Ok(())
    }

    async fn reply_to_sender(&self, msg: &InboundMessage, target: UserId) -> Result<()> {
        let admin_ref = MessageRef {
            chat_id: msg.chat_id,
            message_id: msg.message_id,
        };
        let text = format!("{REPLY_HEADER}\n\n{}", msg.content.filter_text());

        match self
            .messenger
            .send_text(ChatId(target.0), &text, None)
            .await
        {
            Ok(_) => {
                self.messenger.reply_text(admin_ref, REPLY_DELIVERED).await?;
            }
            Err(e) => {
                warn!("reply to sender {} failed: {e}", target.0);
                self.messenger.reply_text(admin_ref, REPLY_FAILED).await?;
            }
        }
        Ok(())
    }

    /// Button press on a forwarded message. Non-admin presses and payloads
    /// this bot never produced are acknowledged silently and dropped.
    pub async fn handle_callback(
        &self,
        from: UserId,
        callback_id: &str,
        data: &str,
        message: Option<MessageRef>,
    ) -> Result<()> {
        if from != self.admin_id {
            self.messenger.answer_callback(callback_id, None).await?;
            return Ok(());
        }

        let Some(action) = CallbackAction::parse(data) else {
            self.messenger.answer_callback(callback_id, None).await?;
            return Ok(());
        };

        match action {
            CallbackAction::Ban { user_id } => {
                self.store.ban(user_id).await?;
                self.messenger
                    .answer_callback(callback_id, Some(BAN_ACK))
                    .await?;
                // Single-use control: hide the button after the first press.
                if let Some(msg) = message {
                    self.messenger.remove_keyboard(msg).await?;
                }
            }
        }
        Ok(())
    }

    pub async fn handle_start(&self, chat_id: ChatId) -> Result<()> {
        self.messenger.send_text(chat_id, WELCOME, None).await?;
        Ok(())
    }

    /// Anyone but the admin gets silence, not an error.
    pub async fn handle_stats(&self, chat_id: ChatId, from: UserId) -> Result<()> {
        if from != self.admin_id {
            return Ok(());
        }
        let total = self.store.total_messages().await?;
        self.messenger
            .send_text(chat_id, &format!("📊 Total messages relayed: {total}"), None)
            .await?;
        Ok(())
    }
}

fn forward_caption(caption: Option<&str>) -> String {
    match caption {
        Some(c) if !c.trim().is_empty() => format!("{FORWARD_HEADER}\n\n{c}"),
        _ => FORWARD_HEADER.to_string(),
    }
}
