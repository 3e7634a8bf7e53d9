//! Forwarding pipeline: download the document, mail it as an attachment, delete the local copy.
//!
//! The downloaded file lives in a [`DownloadedFile`] guard, so it is removed on every exit path:
//! explicitly after a successful send, on drop when the download or the send fails.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use kindle_core::{Bot, BotError, Document, EPUB_MIME_TYPE};
use kindle_mailer::{MailAttachment, MailError, MailTransport, Mailbox, OutboundMail};
use tempfile::TempPath;
use thiserror::Error;
use tracing::{info, instrument};

use crate::config::KindleBotConfig;

pub const MAIL_SUBJECT: &str = "Send EPUB";
pub const MAIL_BODY: &str = "Sending an EPUB to Kindle.";
/// Attachment name used when the sender's document has no file name.
pub const FALLBACK_FILENAME: &str = "document.epub";

#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("cannot stage download in {dir}: {source}")]
    Stage {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{0}")]
    Download(#[from] BotError),
    #[error("{0}")]
    Mail(#[from] MailError),
    #[error("cannot delete downloaded file: {0}")]
    Cleanup(#[source] io::Error),
}

/// Local copy of one document, owned by one forward. Deleted when dropped.
#[derive(Debug)]
pub struct DownloadedFile {
    path: TempPath,
}

impl DownloadedFile {
    /// Reserves a fresh, uniquely named empty file in `dir`.
    pub fn create_in(dir: &Path) -> io::Result<Self> {
        let file = tempfile::Builder::new()
            .prefix("kindle-")
            .suffix(".epub")
            .tempfile_in(dir)?;
        Ok(Self {
            path: file.into_temp_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Deletes the file now, reporting failure instead of swallowing it like drop does.
    pub fn delete(self) -> io::Result<()> {
        self.path.close()
    }
}

/// Download → mail → delete for one document. Shared by all in-flight forwards.
pub struct ForwardPipeline {
    bot: Arc<dyn Bot>,
    mailer: Arc<dyn MailTransport>,
    sender: Mailbox,
    recipient: Mailbox,
    download_dir: PathBuf,
}

impl ForwardPipeline {
    pub fn new(
        bot: Arc<dyn Bot>,
        mailer: Arc<dyn MailTransport>,
        sender: Mailbox,
        recipient: Mailbox,
        download_dir: PathBuf,
    ) -> Self {
        Self {
            bot,
            mailer,
            sender,
            recipient,
            download_dir,
        }
    }

    pub fn from_config(
        config: &KindleBotConfig,
        bot: Arc<dyn Bot>,
        mailer: Arc<dyn MailTransport>,
    ) -> Self {
        Self::new(
            bot,
            mailer,
            config.sender.clone(),
            config.recipient.clone(),
            config.download_dir.clone(),
        )
    }

    /// Builds the mail carrying `attachment_path` for `document`.
    pub fn compose(&self, document: &Document, attachment_path: &Path) -> OutboundMail {
        OutboundMail {
            from: self.sender.clone(),
            to: self.recipient.clone(),
            subject: MAIL_SUBJECT.to_string(),
            body: MAIL_BODY.to_string(),
            attachment: MailAttachment {
                filename: attachment_filename(document).to_string(),
                path: attachment_path.to_path_buf(),
                content_type: EPUB_MIME_TYPE.to_string(),
            },
        }
    }

    /// Runs the three steps in order. Nothing is retried; the first failure is returned.
    #[instrument(skip(self, document), fields(file_id = %document.file_id, file_name = ?document.file_name))]
    pub async fn forward(&self, document: &Document) -> Result<(), ForwardError> {
        let staged = DownloadedFile::create_in(&self.download_dir).map_err(|source| {
            ForwardError::Stage {
                dir: self.download_dir.clone(),
                source,
            }
        })?;

        self.bot.download_document(document, staged.path()).await?;
        info!(path = %staged.path().display(), size = document.file_size, "Document downloaded");

        let mail = self.compose(document, staged.path());
        self.mailer.send(&mail).await?;
        info!(to = %mail.to, "Document mailed");

        staged.delete().map_err(ForwardError::Cleanup)?;
        Ok(())
    }
}

/// Declared file name, or [`FALLBACK_FILENAME`] when the document has none. A declared name is used as-is.
pub fn attachment_filename(document: &Document) -> &str {
    document.file_name.as_deref().unwrap_or(FALLBACK_FILENAME)
}
