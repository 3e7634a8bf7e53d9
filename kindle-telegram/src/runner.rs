//! REPL runner: converts teloxide messages to core::Message and hands each one to the handler in its own task.

use anyhow::Result;
use kindle_core::{Handler, HandlerResponse, ToCoreMessage};
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, error, info, instrument};

use super::adapters::TelegramMessageWrapper;

/// Starts long polling with the given teloxide Bot and handler. Returns when polling stops (Ctrl-C).
///
/// Every message is spawned onto its own task so a slow forward never blocks later messages,
/// including later messages from the same chat.
#[instrument(skip(bot, handler))]
pub async fn run_repl(bot: teloxide::Bot, handler: Arc<dyn Handler>) -> Result<()> {
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let handler = handler.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            debug!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_id = %core_msg.id,
                message_type = %core_msg.message_type,
                "Received message"
            );

            tokio::spawn(async move {
                match handler.handle(&core_msg).await {
                    Ok(HandlerResponse::Ignore) => {}
                    Ok(response) => {
                        info!(
                            user_id = core_msg.user.id,
                            chat_id = core_msg.chat.id,
                            message_id = %core_msg.id,
                            response = ?response,
                            "Message handled"
                        );
                    }
                    Err(e) => {
                        error!(error = %e, user_id = core_msg.user.id, chat_id = core_msg.chat.id, "Handler failed");
                    }
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
