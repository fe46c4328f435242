//! Gleaner binary.
//!
//! Loads `.env`, reads the token and guild id, loads configuration, and runs
//! the Discord bot until it shuts down.

use clap::Parser;
use gleaner_core::GleanerConfig;
use gleaner_discord::GleanerBot;
use tracing::{error, info};

mod cli;
mod observability;

use cli::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env must be loaded before clap reads TOKEN and GUILD_ID
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    observability::init_logging(cli.verbose, cli.json_logs);

    info!("Starting Gleaner");
    let mut config = GleanerConfig::load_with(cli.config.as_deref())?;
    if cli.file_output {
        config = config.with_file_output(true);
    }
    info!(
        batch_size = config.pagination().batch_size(),
        file_output = config.output().file_output(),
        inline_limit = config.output().inline_limit(),
        "Configuration loaded"
    );

    let mut bot = GleanerBot::new(cli.token, cli.guild_id, &config).await?;
    if let Err(e) = bot.start().await {
        error!(error = %e, "Error logging in");
        return Err(e.into());
    }

    Ok(())
}
