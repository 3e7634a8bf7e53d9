//! Message dispatcher: filters EPUB documents, acknowledges, runs the pipeline, reports the outcome.

use std::sync::Arc;

use async_trait::async_trait;
use kindle_core::{Bot, Handler, HandlerResponse, Message, Result};
use tracing::{info, warn};

use crate::pipeline::{ForwardError, ForwardPipeline};

pub const ACK_TEXT: &str = "On it";
pub const DONE_TEXT: &str = "Done!";

/// Text sent back to the user when a forward fails.
pub fn failure_text(error: &ForwardError) -> String {
    format!("Failed to send doc with error: {}", error)
}

/// Forwards every EPUB document it sees to the configured mailbox. Other messages are ignored silently.
pub struct EpubForwardHandler {
    bot: Arc<dyn Bot>,
    pipeline: Arc<ForwardPipeline>,
}

impl EpubForwardHandler {
    pub fn new(bot: Arc<dyn Bot>, pipeline: Arc<ForwardPipeline>) -> Self {
        Self { bot, pipeline }
    }
}

#[async_trait]
impl Handler for EpubForwardHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(document) = message.epub_document() else {
            return Ok(HandlerResponse::Ignore);
        };

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            file_name = ?document.file_name,
            "EPUB received"
        );
        self.bot.send_message(&message.chat, ACK_TEXT).await?;

        match self.pipeline.forward(document).await {
            Ok(()) => {
                // Success is threaded to the original message; failure below is not.
                self.bot.reply_to(message, DONE_TEXT).await?;
                Ok(HandlerResponse::Reply(DONE_TEXT.to_string()))
            }
            Err(e) => {
                warn!(
                    error = %e,
                    user_id = message.user.id,
                    chat_id = message.chat.id,
                    message_id = %message.id,
                    "Forward failed"
                );
                let text = failure_text(&e);
                self.bot.send_message(&message.chat, &text).await?;
                Ok(HandlerResponse::Reply(text))
            }
        }
    }
}
