//! # kindle-bot
//!
//! Watches a Telegram bot for EPUB documents and mails each one to a Kindle address.
//! Wires kindle-telegram (chat session), kindle-mailer (SMTP) and the forwarding pipeline.

pub mod cli;
pub mod config;
pub mod handler;
pub mod pipeline;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use config::{ConfigError, KindleBotConfig};
pub use handler::{failure_text, EpubForwardHandler, ACK_TEXT, DONE_TEXT};
pub use pipeline::{
    attachment_filename, DownloadedFile, ForwardError, ForwardPipeline, FALLBACK_FILENAME,
    MAIL_BODY, MAIL_SUBJECT,
};
pub use runner::{build_bot_components, check_config, run_bot, startup_line, BotComponents};
