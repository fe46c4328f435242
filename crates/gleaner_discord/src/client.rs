//! Discord bot client setup and lifecycle management.

use crate::error::{platform_error, setup_error};
use crate::handler::GleanerHandler;
use gleaner_core::{ExtractCommand, GleanerConfig};
use gleaner_error::PlatformResult;
use serenity::Client;
use std::num::NonZeroU64;
use tracing::{info, instrument};

/// Gleaner's Discord bot.
///
/// # Example
/// ```no_run
/// use gleaner_core::GleanerConfig;
/// use gleaner_discord::GleanerBot;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let token = std::env::var("TOKEN")?;
///     let guild_id = std::env::var("GUILD_ID")?.parse()?;
///
///     let mut bot = GleanerBot::new(token, guild_id, &GleanerConfig::load()?).await?;
///     bot.start().await?;
///     Ok(())
/// }
/// ```
pub struct GleanerBot {
    client: Client,
}

impl GleanerBot {
    /// Create a new bot.
    ///
    /// # Arguments
    /// * `token` - Discord bot token from the Discord Developer Portal
    /// * `guild_id` - Guild the `/extract` command is registered in
    /// * `config` - Pagination and output settings
    ///
    /// # Errors
    /// Returns an error if the Serenity client fails to initialize
    /// (for example when the token is malformed).
    #[instrument(skip(token, config), fields(token_len = token.len()))]
    pub async fn new(
        token: String,
        guild_id: NonZeroU64,
        config: &GleanerConfig,
    ) -> PlatformResult<Self> {
        info!("Initializing Gleaner Discord bot");

        let handler = GleanerHandler::new(guild_id, ExtractCommand::from_config(config));
        let intents = GleanerHandler::intents();
        info!("Building Serenity client with intents: {:?}", intents);

        let client = Client::builder(&token, intents)
            .event_handler(handler)
            .await
            .map_err(setup_error)?;

        info!("Serenity client built successfully");
        Ok(Self { client })
    }

    /// Start the bot.
    ///
    /// Blocks until the client shuts down.
    ///
    /// # Errors
    /// Returns an error if login is rejected or the gateway fails fatally.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> PlatformResult<()> {
        info!("Starting Discord bot");

        self.client
            .start()
            .await
            .map_err(|e| platform_error("Client error", e))
    }
}
