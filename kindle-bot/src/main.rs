//! Binary for the Kindle relay bot.

use anyhow::Result;
use clap::Parser;
use kindle_bot::{check_config, load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let command = Cli::parse().resolved_command();

    // Nothing touches the network before the whole config is known-good.
    let config = match load_config(command.token()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    match command {
        Commands::Run { .. } => run_bot(config).await,
        Commands::Check { .. } => check_config(config).await,
    }
}
