//! Mail transport seam and its SMTP implementation.

use async_trait::async_trait;
use lettre::transport::smtp::authentication::{Credentials, Mechanism};
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use tracing::{debug, info, instrument};

use crate::config::SmtpConfig;
use crate::error::{MailError, Result};
use crate::mail::OutboundMail;

/// Delivers one composed mail. No retry; a failed send is returned as-is.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, mail: &OutboundMail) -> Result<()>;
}

/// Long-lived SMTP client. Connects in plaintext and upgrades with STARTTLS when the relay offers it;
/// authenticates with PLAIN or LOGIN.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
    port: u16,
}

impl SmtpMailer {
    /// Builds the transport. Does not touch the network.
    pub fn new(config: &SmtpConfig) -> Result<Self> {
        let tls = TlsParameters::new(config.host.clone()).map_err(MailError::BuildTransport)?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(config.host.as_str())
            .port(config.port)
            .tls(Tls::Opportunistic(tls))
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .authentication(vec![Mechanism::Plain, Mechanism::Login])
            .build();

        Ok(Self {
            transport,
            host: config.host.clone(),
            port: config.port,
        })
    }

    /// Opens a connection to the relay and closes it again. True when the relay answered.
    pub async fn test_connection(&self) -> Result<bool> {
        self.transport
            .test_connection()
            .await
            .map_err(MailError::Send)
    }

    /// Like [`Self::test_connection`], but a silent relay is an error too.
    pub async fn ensure_reachable(&self) -> Result<()> {
        if self.test_connection().await? {
            Ok(())
        } else {
            Err(MailError::Unreachable {
                host: self.host.clone(),
                port: self.port,
            })
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    #[instrument(skip(self, mail), fields(host = %self.host, to = %mail.to, filename = %mail.attachment.filename))]
    async fn send(&self, mail: &OutboundMail) -> Result<()> {
        let message = mail.build_message().await?;
        debug!("Built email");

        let response = self
            .transport
            .send(message)
            .await
            .map_err(MailError::Send)?;

        info!(code = %response.code(), "Email accepted by relay");
        Ok(())
    }
}
