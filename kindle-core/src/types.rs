//! Core types: user, chat, document, message, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// MIME type Telegram reports for EPUB documents.
pub const EPUB_MIME_TYPE: &str = "application/epub+zip";

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// Reference to a document attachment. Bytes are resolved on demand through [`crate::Bot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Transport file id used to fetch the bytes.
    pub file_id: String,
    /// Stable id of the file across bots; not usable for downloads.
    pub file_unique_id: String,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub file_size: u32,
}

impl Document {
    /// True when the declared MIME type is exactly [`EPUB_MIME_TYPE`].
    pub fn is_epub(&self) -> bool {
        self.mime_type.as_deref() == Some(EPUB_MIME_TYPE)
    }
}

/// A single inbound message with user, chat, text content and optional document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Text or caption; empty when the message has neither.
    pub content: String,
    /// `text`, `document` or `other`.
    pub message_type: String,
    pub document: Option<Document>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// The attached document if it is an EPUB.
    pub fn epub_document(&self) -> Option<&Document> {
        self.document.as_ref().filter(|d| d.is_epub())
    }
}

/// Identity of the bot account, as reported by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotIdentity {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: String,
}

/// Handler outcome. `Reply(text)` carries the final status text sent back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Message did not concern this handler; nothing was sent.
    Ignore,
    /// Handled; `text` is the last reply sent to the user.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Processes one inbound message. Called once per message, possibly concurrently for different messages.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, message: &Message) -> crate::error::Result<HandlerResponse>;
}
