//! Bot abstraction for talking back to the sender and fetching attachments.
//!
//! [`Bot`] is transport-agnostic; kindle-telegram implements it via teloxide and tests substitute
//! recording mocks.

use std::path::Path;

use crate::error::{BotError, Result};
use crate::types::{BotIdentity, Chat, Document, Message};
use async_trait::async_trait;

/// Abstraction over the chat session. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends `text` into the message's chat, threaded as a reply to `message`.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Resolves the document reference and writes its bytes to `destination` (created or truncated).
    async fn download_document(&self, document: &Document, destination: &Path) -> Result<()>;
    /// Identity of the bot account behind this session.
    async fn get_me(&self) -> Result<BotIdentity>;
}

/// Parses a message id string into an i32. Used when threading replies.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| BotError::Bot(format!("Invalid message_id for reply: {}", s)))
}
