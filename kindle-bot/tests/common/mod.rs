//! Mock [`kindle_core::Bot`] and [`kindle_mailer::MailTransport`] for driving the handler without Telegram or SMTP.
//!
//! Both mocks append to one shared [`EventLog`] so tests can assert on the order of
//! acknowledgement, download, send and final reply.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use kindle_bot::{EpubForwardHandler, ForwardPipeline};
use kindle_core::{Bot, BotError, BotIdentity, Chat, Document, Message, User};
use kindle_mailer::{MailError, MailTransport, Mailbox, OutboundMail};

pub const CHAT_ID: i64 = 100;
pub const MESSAGE_ID: &str = "42";
pub const EPUB_BYTES: &[u8] = b"PK\x03\x04 mimetypeapplication/epub+zip";

/// One mail as seen by [`MockMailer`] at send time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailRecord {
    pub to: String,
    pub subject: String,
    pub body: String,
    pub filename: String,
    pub content_type: String,
    pub path: PathBuf,
    /// Attachment bytes read from `path` during send; None if the file was missing.
    pub bytes: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Sent { chat_id: i64, text: String },
    Replied { chat_id: i64, reply_to: String, text: String },
    Downloaded { file_id: String, path: PathBuf },
    Mailed(MailRecord),
}

pub type EventLog = Arc<Mutex<Vec<Event>>>;

pub fn events(log: &EventLog) -> Vec<Event> {
    log.lock().unwrap().clone()
}

pub enum DownloadBehavior {
    Bytes(Vec<u8>),
    Fail(String),
}

pub struct MockBot {
    events: EventLog,
    download: DownloadBehavior,
    fail_sends: bool,
}

impl MockBot {
    pub fn new(events: EventLog, download: DownloadBehavior) -> Self {
        Self {
            events,
            download,
            fail_sends: false,
        }
    }

    /// Every send_message / reply_to fails, as when the chat is unreachable.
    pub fn failing_sends(mut self) -> Self {
        self.fail_sends = true;
        self
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> kindle_core::Result<()> {
        if self.fail_sends {
            return Err(BotError::Bot("Forbidden: bot was blocked by the user".to_string()));
        }
        self.events.lock().unwrap().push(Event::Sent {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> kindle_core::Result<()> {
        if self.fail_sends {
            return Err(BotError::Bot("Forbidden: bot was blocked by the user".to_string()));
        }
        self.events.lock().unwrap().push(Event::Replied {
            chat_id: message.chat.id,
            reply_to: message.id.clone(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn download_document(
        &self,
        document: &Document,
        destination: &Path,
    ) -> kindle_core::Result<()> {
        match &self.download {
            DownloadBehavior::Bytes(bytes) => {
                tokio::fs::write(destination, bytes).await?;
                self.events.lock().unwrap().push(Event::Downloaded {
                    file_id: document.file_id.clone(),
                    path: destination.to_path_buf(),
                });
                Ok(())
            }
            DownloadBehavior::Fail(reason) => Err(BotError::Download(reason.clone())),
        }
    }

    async fn get_me(&self) -> kindle_core::Result<BotIdentity> {
        Ok(BotIdentity {
            id: 1,
            username: Some("kindlebot".to_string()),
            first_name: "Kindle".to_string(),
        })
    }
}

pub struct MockMailer {
    events: EventLog,
    fail: bool,
}

impl MockMailer {
    pub fn new(events: EventLog) -> Self {
        Self { events, fail: false }
    }

    /// Records the attempt, then fails like a relay that never answers.
    pub fn failing(events: EventLog) -> Self {
        Self { events, fail: true }
    }
}

#[async_trait]
impl MailTransport for MockMailer {
    async fn send(&self, mail: &OutboundMail) -> kindle_mailer::Result<()> {
        let bytes = std::fs::read(&mail.attachment.path).ok();
        self.events.lock().unwrap().push(Event::Mailed(MailRecord {
            to: mail.to.email.to_string(),
            subject: mail.subject.clone(),
            body: mail.body.clone(),
            filename: mail.attachment.filename.clone(),
            content_type: mail.attachment.content_type.clone(),
            path: mail.attachment.path.clone(),
            bytes,
        }));
        if self.fail {
            return Err(MailError::Unreachable {
                host: "smtp.test".to_string(),
                port: 587,
            });
        }
        Ok(())
    }
}

/// Handler wired to the mocks, staging downloads in `download_dir`.
pub fn build_handler(
    bot: MockBot,
    mailer: MockMailer,
    download_dir: &Path,
) -> EpubForwardHandler {
    let bot: Arc<dyn Bot> = Arc::new(bot);
    let sender: Mailbox = "Kindle Bot Sender <bot@example.com>".parse().unwrap();
    let recipient: Mailbox = "reader@kindle.com".parse().unwrap();
    let pipeline = Arc::new(ForwardPipeline::new(
        bot.clone(),
        Arc::new(mailer),
        sender,
        recipient,
        download_dir.to_path_buf(),
    ));
    EpubForwardHandler::new(bot, pipeline)
}

pub fn document(file_name: Option<&str>, mime_type: Option<&str>) -> Document {
    Document {
        file_id: "BQACAgIAAxkBAAIB".to_string(),
        file_unique_id: "AgADqQ4AAm".to_string(),
        file_name: file_name.map(str::to_string),
        mime_type: mime_type.map(str::to_string),
        file_size: EPUB_BYTES.len() as u32,
    }
}

pub fn message(document: Option<Document>) -> Message {
    Message {
        id: MESSAGE_ID.to_string(),
        user: User {
            id: 7,
            username: Some("reader".to_string()),
            first_name: Some("Reader".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: CHAT_ID,
            chat_type: "private".to_string(),
        },
        content: String::new(),
        message_type: if document.is_some() { "document" } else { "text" }.to_string(),
        document,
        created_at: Utc::now(),
    }
}

/// Number of entries left in the staging directory.
pub fn staged_files(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}
