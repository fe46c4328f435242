//! Serenity event handler for Gleaner.

use crate::commands::{extract_command, parse_request};
use crate::session::DiscordSession;
use gleaner_core::{
    CONFIRMATION, ChannelId, ExtractCommand, ExtractionOutcome, FAILURE_NOTICE, GuildId,
};
use gleaner_error::{GleanerResult, PlatformError, PlatformErrorKind};
use serenity::async_trait;
use serenity::builder::{CreateInteractionResponse, CreateInteractionResponseMessage};
use serenity::client::{Context, EventHandler};
use serenity::model::application::{CommandInteraction, Interaction};
use serenity::model::gateway::{GatewayIntents, Ready};
use serenity::model::id;
use std::num::NonZeroU64;
use tracing::{debug, error, info, instrument, warn};

/// Event handler that registers `/extract` and answers its invocations.
pub struct GleanerHandler {
    /// Guild the command is registered in
    guild_id: id::GuildId,
    /// Extraction flow shared by all invocations
    command: ExtractCommand,
}

impl GleanerHandler {
    /// Create a handler for `guild_id`.
    pub fn new(guild_id: NonZeroU64, command: ExtractCommand) -> Self {
        Self {
            guild_id: id::GuildId::from(guild_id),
            command,
        }
    }

    /// Gateway intents the handler needs.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES
    }

    /// Run the extraction for one invocation.
    #[instrument(
        skip(self, session, interaction),
        fields(user = %interaction.user.name, channel_id = %interaction.channel_id)
    )]
    async fn extract(
        &self,
        session: &DiscordSession,
        interaction: &CommandInteraction,
    ) -> GleanerResult<ExtractionOutcome> {
        let request = parse_request(
            interaction
                .data
                .options
                .iter()
                .map(|option| (option.name.as_str(), option.value.as_str())),
        )?;
        let guild = interaction.guild_id.ok_or_else(|| {
            PlatformError::new(PlatformErrorKind::NotInGuild(ExtractCommand::NAME.to_string()))
        })?;

        info!(
            suffix = %request.channel_suffix(),
            keys = ?request.keys(),
            "Extract command received"
        );

        self.command
            .run(
                session,
                GuildId(guild.get()),
                ChannelId(interaction.channel_id.get()),
                &request,
            )
            .await
    }

    /// Reply to the invoker.
    async fn respond(
        ctx: &Context,
        interaction: &CommandInteraction,
        content: &str,
        ephemeral: bool,
    ) {
        let message = CreateInteractionResponseMessage::new()
            .content(content)
            .ephemeral(ephemeral);
        if let Err(e) = interaction
            .create_response(&ctx.http, CreateInteractionResponse::Message(message))
            .await
        {
            let err = PlatformError::new(PlatformErrorKind::InteractionFailed(e.to_string()));
            error!(error = %err, "Failed to respond to interaction");
        }
    }
}

#[async_trait]
impl EventHandler for GleanerHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(bot = %ready.user.name, guild_id = %self.guild_id, "Bot is online");

        info!("Registering application commands");
        match self.guild_id.set_commands(&ctx.http, vec![extract_command()]).await {
            Ok(commands) => info!(count = commands.len(), "Application commands registered"),
            Err(e) => error!(error = %e, "Failed to register application commands"),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };
        if command.data.name != ExtractCommand::NAME {
            debug!(command = %command.data.name, "Ignoring unknown command");
            return;
        }

        let session = DiscordSession::new(ctx.http.clone());
        match self.extract(&session, &command).await {
            Ok(outcome) => {
                if !outcome.is_complete() {
                    warn!(
                        channels = ?outcome.partial_channels(),
                        "Extraction finished with partially scanned channels"
                    );
                }
                Self::respond(&ctx, &command, CONFIRMATION, false).await;
            }
            Err(e) => {
                error!(error = %e, "Error in extract command");
                Self::respond(&ctx, &command, FAILURE_NOTICE, true).await;
            }
        }
    }
}
