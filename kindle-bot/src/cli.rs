//! CLI parser and config loading.

use clap::{Parser, Subcommand};

use crate::config::{ConfigError, KindleBotConfig};

#[derive(Parser)]
#[command(name = "kindle-bot")]
#[command(about = "Telegram bot that mails EPUB documents to a Kindle", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot (default). Config from env; token can override BOT_TOKEN.
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Validate configuration and check that the SMTP relay answers, then exit.
    Check {
        #[arg(short, long)]
        token: Option<String>,
    },
}

impl Cli {
    /// The subcommand to execute; `run` when none was given.
    pub fn resolved_command(&self) -> Commands {
        match &self.command {
            Some(Commands::Run { token }) => Commands::Run {
                token: token.clone(),
            },
            Some(Commands::Check { token }) => Commands::Check {
                token: token.clone(),
            },
            None => Commands::Run { token: None },
        }
    }
}

impl Commands {
    pub fn token(&self) -> Option<String> {
        match self {
            Commands::Run { token } | Commands::Check { token } => token.clone(),
        }
    }
}

/// Load config from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<KindleBotConfig, ConfigError> {
    KindleBotConfig::load(token)
}
