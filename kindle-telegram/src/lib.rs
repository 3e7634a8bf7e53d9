//! # kindle-telegram
//!
//! Telegram layer: adapters to core types, [`kindle_core::Bot`] implementation (replies and file
//! downloads), minimal config, REPL runner. Knows nothing about mail.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{document_to_core, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::run_repl;
