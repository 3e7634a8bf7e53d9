//! # kindle-mailer
//!
//! Outbound mail model ([`OutboundMail`]), the [`MailTransport`] seam, and its SMTP implementation
//! [`SmtpMailer`] built on lettre.

mod config;
mod error;
mod mail;
mod transport;

pub use config::{SmtpConfig, DEFAULT_SMTP_PORT};
pub use error::{MailError, Result};
pub use mail::{MailAttachment, OutboundMail};
pub use transport::{MailTransport, SmtpMailer};

/// Re-exported so callers can build mailboxes without depending on lettre directly.
pub use lettre::message::Mailbox;
pub use lettre::Address;
