//! Wraps teloxide::Bot and implements [`kindle_core::Bot`]. Production code talks to Telegram; tests can substitute another Bot impl.

use std::path::Path;

use async_trait::async_trait;
use kindle_core::{parse_message_id, Bot as CoreBot, BotError, BotIdentity, Chat, Document, Message, Result};
use teloxide::net::Download;
use teloxide::{
    prelude::*,
    types::{ChatId, FileId, MessageId, ReplyParameters},
};
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Thin wrapper around teloxide::Bot that implements kindle-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        let id = parse_message_id(&message.id)?;
        self.bot
            .send_message(ChatId(message.chat.id), text.to_string())
            .reply_parameters(ReplyParameters::new(MessageId(id)))
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn download_document(&self, document: &Document, destination: &Path) -> Result<()> {
        let file = self
            .bot
            .get_file(FileId(document.file_id.clone()))
            .await
            .map_err(|e| BotError::Download(e.to_string()))?;
        debug!(file_id = %document.file_id, remote_path = %file.path, "Resolved document");

        let mut dst = tokio::fs::File::create(destination).await?;
        self.bot
            .download_file(&file.path, &mut dst)
            .await
            .map_err(|e| BotError::Download(e.to_string()))?;
        dst.flush().await?;
        dst.sync_all().await?;
        Ok(())
    }

    async fn get_me(&self) -> Result<BotIdentity> {
        let me = self
            .bot
            .get_me()
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(BotIdentity {
            id: me.user.id.0 as i64,
            username: me.user.username.clone(),
            first_name: me.user.first_name.clone(),
        })
    }
}
