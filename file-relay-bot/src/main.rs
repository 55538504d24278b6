//! Binary for the file relay bot.

use anyhow::Result;
use clap::Parser;
use file_relay_bot::{load_config, run_bot, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            token,
            download_dir,
        } => {
            let mut config = load_config(token)?;
            if let Some(dir) = download_dir {
                config.download_dir = dir;
            }
            run_bot(config).await
        }
    }
}
