//! # kindle-core
//!
//! Core types and traits for the Kindle relay bot: [`Bot`], [`Handler`], message, document and user
//! types, and tracing initialization. Transport-agnostic; used by kindle-telegram and kindle-bot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod mask;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use mask::mask_token;
pub use types::{
    BotIdentity, Chat, Document, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser,
    User, EPUB_MIME_TYPE,
};
