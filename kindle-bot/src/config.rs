//! Bot configuration loaded from the environment.
//!
//! Everything the bot needs to accept traffic is checked here, before any connection is made:
//! all required variables must be present and the mail addresses and API URL must parse.

use std::env;
use std::path::PathBuf;

use kindle_mailer::{Address, Mailbox, SmtpConfig, DEFAULT_SMTP_PORT};
use kindle_telegram::TelegramConfig;
use thiserror::Error;

/// Display name used in the From header of every forwarded mail.
pub const SENDER_NAME: &str = "Kindle Bot Sender";

/// Required variables, in the order they are reported when missing.
pub const REQUIRED_VARS: [&str; 5] = [
    "SMTP_HOST",
    "SMTP_USER",
    "SMTP_PASS",
    "BOT_TOKEN",
    "KINDLE_EMAIL",
];

const DEFAULT_LOG_FILE: &str = "logs/kindle-bot.log";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Please provide the following environment variables: {}", .0.join(", "))]
    Missing(Vec<String>),
    #[error("Invalid value for {key}: {message}")]
    Invalid { key: String, message: String },
}

/// Complete, validated configuration. Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct KindleBotConfig {
    pub telegram: TelegramConfig,
    pub smtp: SmtpConfig,
    /// `"Kindle Bot Sender" <SMTP_USER>`
    pub sender: Mailbox,
    /// KINDLE_EMAIL
    pub recipient: Mailbox,
    /// Where downloaded documents are staged while being mailed.
    pub download_dir: PathBuf,
    pub log_file: String,
}

impl KindleBotConfig {
    /// Loads from environment variables. `token` overrides BOT_TOKEN if provided.
    ///
    /// Required: SMTP_HOST, SMTP_USER, SMTP_PASS, BOT_TOKEN, KINDLE_EMAIL (empty counts as missing).
    /// Optional: SMTP_PORT (default 587), TELEGRAM_API_URL / TELOXIDE_API_URL, DOWNLOAD_DIR, LOG_FILE.
    pub fn load(token: Option<String>) -> Result<Self, ConfigError> {
        let token = token.filter(|t| !t.trim().is_empty());

        let missing: Vec<String> = REQUIRED_VARS
            .into_iter()
            .filter(|name| !(*name == "BOT_TOKEN" && token.is_some()))
            .filter(|name| non_empty_var(name).is_none())
            .map(String::from)
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let required = |name: &str| non_empty_var(name).unwrap_or_default();
        let smtp_host = required("SMTP_HOST");
        let smtp_user = required("SMTP_USER");
        let smtp_pass = required("SMTP_PASS");
        let bot_token = token.unwrap_or_else(|| required("BOT_TOKEN"));
        let kindle_email = required("KINDLE_EMAIL");

        let smtp_port = match non_empty_var("SMTP_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "SMTP_PORT".to_string(),
                message: format!("{} ({})", raw, e),
            })?,
            None => DEFAULT_SMTP_PORT,
        };

        let sender = Mailbox::new(Some(SENDER_NAME.to_string()), parse_address("SMTP_USER", &smtp_user)?);
        let recipient = Mailbox::new(None, parse_address("KINDLE_EMAIL", &kindle_email)?);

        let mut telegram = TelegramConfig::with_token(bot_token);
        telegram.telegram_api_url = TelegramConfig::api_url_from_env();
        telegram.validate().map_err(|e| ConfigError::Invalid {
            key: "TELEGRAM_API_URL".to_string(),
            message: e.to_string(),
        })?;

        let download_dir = non_empty_var("DOWNLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| env::temp_dir().join("kindle-bot"));
        let log_file = non_empty_var("LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            telegram,
            smtp: SmtpConfig::new(smtp_host, smtp_user, smtp_pass).with_port(smtp_port),
            sender,
            recipient,
            download_dir,
            log_file,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_address(key: &str, value: &str) -> Result<Address, ConfigError> {
    value.trim().parse::<Address>().map_err(|e| ConfigError::Invalid {
        key: key.to_string(),
        message: format!("{} ({})", value, e),
    })
}
