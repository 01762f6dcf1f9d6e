use crate::domain::UserId;

/// Action encoded in an inline button's callback data.
///
/// The wire format is `ban_<user_id>` (kept from the original deployment);
/// encoding and parsing live here so no call site ever string-splits payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallbackAction {
    Ban { user_id: UserId },
}

impl CallbackAction {
    pub fn encode(&self) -> String {
        match self {
            CallbackAction::Ban { user_id } => format!("ban_{}", user_id.0),
        }
    }

    /// Returns `None` for payloads this bot never produced.
    pub fn parse(data: &str) -> Option<Self> {
        let rest = data.strip_prefix("ban_")?;
        let user_id = rest.parse::<i64>().ok()?;
        Some(CallbackAction::Ban {
            user_id: UserId(user_id),
        })
    }
}
