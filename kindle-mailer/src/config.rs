//! SMTP connection settings.

use std::fmt;

/// Submission port; the relay is reached in plaintext and upgraded with STARTTLS when offered.
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Connection parameters for the SMTP relay.
#[derive(Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl SmtpConfig {
    pub fn new(host: String, username: String, password: String) -> Self {
        Self {
            host,
            port: DEFAULT_SMTP_PORT,
            username,
            password,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

// Password stays out of logs and panics.
impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
