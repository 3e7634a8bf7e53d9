//! Minimal Telegram config: token and optional API URL. Loaded from env: BOT_TOKEN, TELEGRAM_API_URL (or TELOXIDE_API_URL).

use anyhow::Result;
use kindle_core::mask_token;
use std::env;
use std::fmt;

/// Minimal Telegram bot config (connectivity only).
#[derive(Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    /// Bot API base URL override (local Bot API server, mock server in tests).
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from env: BOT_TOKEN required; TELEGRAM_API_URL (or TELOXIDE_API_URL) optional.
    pub fn from_env() -> Result<Self> {
        let bot_token = env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?;
        Ok(Self {
            bot_token,
            telegram_api_url: Self::api_url_from_env(),
        })
    }

    /// Builds config with the given token; no API URL override.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
        }
    }

    /// Reads TELEGRAM_API_URL, falling back to TELOXIDE_API_URL. Empty values count as unset.
    pub fn api_url_from_env() -> Option<String> {
        env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok()
            .filter(|s| !s.trim().is_empty())
    }

    /// Checks that telegram_api_url, if set, is a valid URL.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Creates the teloxide Bot, pointed at telegram_api_url when set.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match self.telegram_api_url {
            Some(ref url_str) => {
                let url = reqwest::Url::parse(url_str)
                    .map_err(|e| anyhow::anyhow!("Invalid TELEGRAM_API_URL {}: {}", url_str, e))?;
                Ok(bot.set_api_url(url))
            }
            None => Ok(bot),
        }
    }
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &mask_token(&self.bot_token))
            .field("telegram_api_url", &self.telegram_api_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// **Test: with_token sets bot_token; telegram_api_url is None.**
    #[test]
    fn test_with_token() {
        let config = TelegramConfig::with_token("test_token".to_string());
        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_prefers_telegram_api_url() {
        env::set_var("BOT_TOKEN", "env_token");
        env::set_var("TELEGRAM_API_URL", "http://127.0.0.1:8081");
        env::set_var("TELOXIDE_API_URL", "http://127.0.0.1:9999");

        let config = TelegramConfig::from_env().unwrap();
        assert_eq!(config.bot_token, "env_token");
        assert_eq!(config.telegram_api_url.as_deref(), Some("http://127.0.0.1:8081"));

        env::remove_var("TELEGRAM_API_URL");
        let config = TelegramConfig::from_env().unwrap();
        assert_eq!(config.telegram_api_url.as_deref(), Some("http://127.0.0.1:9999"));

        env::remove_var("TELOXIDE_API_URL");
        env::remove_var("BOT_TOKEN");
    }

    #[test]
    #[serial]
    fn test_from_env_requires_token() {
        env::remove_var("BOT_TOKEN");
        assert!(TelegramConfig::from_env().is_err());
    }

    #[test]
    fn test_debug_masks_token() {
        let config = TelegramConfig::with_token("123456789:AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsaw".to_string());
        let printed = format!("{:?}", config);
        assert!(printed.contains("1234567***Dsaw"));
        assert!(!printed.contains("AAHdqTcvCH1vGWJxfSeofSAs0K5PALDsaw"));
    }

    #[test]
    fn test_validate_rejects_invalid_url() {
        let mut config = TelegramConfig::with_token("t".to_string());
        config.telegram_api_url = Some("not-a-valid-url".to_string());
        assert!(config.validate().is_err());
        assert!(config.build_bot().is_err());
    }
}
