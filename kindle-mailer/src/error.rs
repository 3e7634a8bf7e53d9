//! Error types for composing and delivering mail.

use std::path::PathBuf;
use thiserror::Error;

/// Everything building or sending an [`crate::OutboundMail`] can fail with.
#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid content type {0}")]
    ContentType(String),
    #[error("cannot read attachment {path}: {source}")]
    ReadAttachment {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot build email: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("cannot build smtp transport: {0}")]
    BuildTransport(#[source] lettre::transport::smtp::Error),
    #[error("smtp error: {0}")]
    Send(#[source] lettre::transport::smtp::Error),
    #[error("smtp relay {host}:{port} did not answer")]
    Unreachable { host: String, port: u16 },
}

/// Result type for mail operations; uses [`MailError`].
pub type Result<T> = std::result::Result<T, MailError>;
