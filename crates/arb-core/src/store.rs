use async_trait::async_trait;

use crate::{
    domain::{MessageId, UserId},
    Result,
};

/// Persistence port for the relay state: the ban set, the sender↔relayed-message
/// mapping, and the running message counter.
///
/// Every call is one self-contained durable read or write; there is no caching
/// layer, so each call reflects the latest committed state.
#[async_trait]
pub trait RelayStore: Send + Sync {
    /// Returns false for users that were never banned.
    async fn is_banned(&self, user: UserId) -> Result<bool>;

    /// Idempotent: banning an already-banned user is a no-op, not an error.
    async fn ban(&self, user: UserId) -> Result<()>;

    /// Appends the mapping from a forwarded message (as the admin sees it)
    /// back to its original sender.
    async fn record_relay(&self, sender: UserId, admin_msg: MessageId) -> Result<()>;

    /// Returns the sender associated with an admin-facing message id, or
    /// `None` if the admin replied to something that was never forwarded.
    /// The most recently recorded mapping wins if an id ever repeats.
    async fn lookup_sender(&self, admin_msg: MessageId) -> Result<Option<UserId>>;

    /// Atomically bumps the total-relayed counter by one.
    async fn increment_total_messages(&self) -> Result<()>;

    async fn total_messages(&self) -> Result<i64>;
}
