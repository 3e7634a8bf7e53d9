//! Error types for the bot core.
//!
//! [`BotError`] covers everything a [`crate::Bot`] implementation or handler can fail with.

use thiserror::Error;

/// Top-level error for the chat side (transport, file retrieval, IO).
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Download error: {0}")]
    Download(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations; uses [`BotError`].
pub type Result<T> = std::result::Result<T, BotError>;
