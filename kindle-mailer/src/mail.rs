//! Outbound mail: one sender, one recipient, a plain-text body and exactly one file attachment.

use std::path::PathBuf;

use lettre::message::{header::ContentType, Attachment, Mailbox, MultiPart, SinglePart};
use lettre::Message;

use crate::error::{MailError, Result};

/// File attached to an [`OutboundMail`]. Bytes are read from `path` when the message is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailAttachment {
    /// Name shown to the recipient (Content-Disposition filename).
    pub filename: String,
    pub path: PathBuf,
    pub content_type: String,
}

/// A composed mail, independent of the transport that will deliver it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMail {
    pub from: Mailbox,
    pub to: Mailbox,
    pub subject: String,
    pub body: String,
    pub attachment: MailAttachment,
}

impl OutboundMail {
    /// Builds the MIME message using `attachment_body` as the attachment bytes.
    pub fn to_message(&self, attachment_body: Vec<u8>) -> Result<Message> {
        let content_type = ContentType::parse(&self.attachment.content_type)
            .map_err(|_| MailError::ContentType(self.attachment.content_type.clone()))?;

        let attachment =
            Attachment::new(self.attachment.filename.clone()).body(attachment_body, content_type);

        let message = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(self.subject.clone())
            .multipart(
                MultiPart::mixed()
                    .singlepart(SinglePart::plain(self.body.clone()))
                    .singlepart(attachment),
            )?;

        Ok(message)
    }

    /// Reads the attachment from disk and builds the MIME message.
    pub async fn build_message(&self) -> Result<Message> {
        let data = tokio::fs::read(&self.attachment.path)
            .await
            .map_err(|source| MailError::ReadAttachment {
                path: self.attachment.path.clone(),
                source,
            })?;
        self.to_message(data)
    }
}
