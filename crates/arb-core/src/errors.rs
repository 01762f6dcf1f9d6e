/// Core error type for the relay bot.
///
/// Adapter crates should map their specific errors into this type so the bot
/// core can handle failures consistently (fatal config vs per-update
/// storage/delivery failures).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("delivery error: {0}")]
    Delivery(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
