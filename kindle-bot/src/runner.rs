//! Wiring: builds the long-lived bot session and mail transport once and runs the dispatcher.

use anyhow::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use kindle_core::{init_tracing, mask_token, Bot, BotIdentity, Handler};
use kindle_mailer::{MailTransport, SmtpMailer};
use kindle_telegram::{run_repl, TelegramBotAdapter};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::config::KindleBotConfig;
use crate::handler::EpubForwardHandler;
use crate::pipeline::ForwardPipeline;

/// Process-wide singletons, constructed once and shared read-only by every forward.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub bot: Arc<dyn Bot>,
    pub mailer: Arc<SmtpMailer>,
    pub handler: Arc<dyn Handler>,
}

/// Builds the Telegram session, SMTP transport, pipeline and handler. Creates the download directory.
/// No network traffic happens here.
#[instrument(skip(config))]
pub fn build_bot_components(config: &KindleBotConfig) -> Result<BotComponents> {
    std::fs::create_dir_all(&config.download_dir).map_err(|e| {
        anyhow::anyhow!(
            "Failed to create download directory {}: {}",
            config.download_dir.display(),
            e
        )
    })?;

    let teloxide_bot = config.telegram.build_bot()?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let mailer = Arc::new(SmtpMailer::new(&config.smtp)?);
    let transport: Arc<dyn MailTransport> = mailer.clone();

    let pipeline = Arc::new(ForwardPipeline::from_config(config, bot.clone(), transport));
    let handler: Arc<dyn Handler> = Arc::new(EpubForwardHandler::new(bot.clone(), pipeline));

    Ok(BotComponents {
        teloxide_bot,
        bot,
        mailer,
        handler,
    })
}

/// Operator-facing startup line.
pub fn startup_line(me: &BotIdentity, now: DateTime<Utc>) -> String {
    let handle = me.username.as_deref().unwrap_or(me.first_name.as_str());
    format!(
        "Bot @{} is up and running! Current date: {}",
        handle,
        now.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

/// Main entry: init logging, build components, announce identity, then poll until interrupted.
#[instrument(skip(config))]
pub async fn run_bot(config: KindleBotConfig) -> Result<()> {
    init_tracing(&config.log_file)?;

    info!(
        bot_token = %mask_token(&config.telegram.bot_token),
        telegram_api_url = ?config.telegram.telegram_api_url,
        smtp_host = %config.smtp.host,
        smtp_port = config.smtp.port,
        smtp_user = %config.smtp.username,
        kindle_email = %config.recipient,
        download_dir = %config.download_dir.display(),
        "Initializing bot"
    );

    let components = build_bot_components(&config)?;

    match components.bot.get_me().await {
        Ok(me) => {
            println!("{}", startup_line(&me, Utc::now()));
            info!(username = ?me.username, bot_id = me.id, "Bot identity confirmed");
        }
        // Polling reports its own errors; a failed identity check only loses the banner.
        Err(e) => error!(error = %e, "getMe failed"),
    }

    run_repl(components.teloxide_bot, components.handler).await?;

    info!("Bot stopped");
    Ok(())
}

/// Validates configuration end to end: SMTP relay must answer. Prints the outcome.
#[instrument(skip(config))]
pub async fn check_config(config: KindleBotConfig) -> Result<()> {
    let mailer = SmtpMailer::new(&config.smtp)?;
    mailer.ensure_reachable().await?;

    println!(
        "Configuration OK: SMTP relay {}:{} answered; documents will be sent to {}",
        mailer.host(),
        mailer.port(),
        config.recipient
    );
    Ok(())
}
