//! The `/extract` command flow.

use crate::{
    ChannelId, ChatPlatform, ExtractionRequest, GleanerConfig, GuildId, Paginator, Reporter,
    ResultRecord, extract_fields,
};
use derive_getters::Getters;
use gleaner_error::GleanerResult;
use tracing::{info, instrument, warn};

/// Reply sent to the invoker once extraction finishes.
pub const CONFIRMATION: &str = "Data extraction complete.";

/// Ephemeral reply sent to the invoker when extraction fails.
pub const FAILURE_NOTICE: &str = "An error occurred.";

/// What one extraction run produced.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ExtractionOutcome {
    /// Records in channel order, then message fetch order
    records: Vec<ResultRecord>,
    /// Channels whose name matched the suffix
    channels_scanned: usize,
    /// Messages read across all matching channels
    messages_scanned: usize,
    /// Channels whose history scan stopped on a fetch error
    partial_channels: Vec<String>,
}

impl ExtractionOutcome {
    /// Whether every matching channel was read to its first message.
    pub fn is_complete(&self) -> bool {
        self.partial_channels.is_empty()
    }
}

/// Drives one `/extract` invocation: select channels, scan, extract, report.
#[derive(Debug, Clone, Default)]
pub struct ExtractCommand {
    paginator: Paginator,
    reporter: Reporter,
}

impl ExtractCommand {
    /// Slash command name.
    pub const NAME: &'static str = "extract";

    /// Create a command from its parts.
    pub fn new(paginator: Paginator, reporter: Reporter) -> Self {
        Self {
            paginator,
            reporter,
        }
    }

    /// Create a command from loaded configuration.
    pub fn from_config(config: &GleanerConfig) -> Self {
        Self {
            paginator: Paginator::new(*config.pagination().batch_size()),
            reporter: Reporter::from(config.output()),
        }
    }

    /// The paginator used for history scans.
    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// The reporter used for delivery.
    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    /// Scan every guild channel matching the request and collect records.
    ///
    /// Channels are visited in the order the platform lists them. A channel
    /// whose scan fails midway contributes the messages read before the
    /// failure and is named in [`ExtractionOutcome::partial_channels`].
    ///
    /// # Errors
    ///
    /// Returns error if the guild's channels cannot be listed.
    #[instrument(
        skip(self, platform, request),
        fields(guild_id = %guild, suffix = %request.channel_suffix(), keys = request.keys().len())
    )]
    pub async fn collect(
        &self,
        platform: &dyn ChatPlatform,
        guild: GuildId,
        request: &ExtractionRequest,
    ) -> GleanerResult<ExtractionOutcome> {
        let channels = platform.guild_channels(guild).await?;

        let mut records = Vec::new();
        let mut channels_scanned = 0;
        let mut messages_scanned = 0;
        let mut partial_channels = Vec::new();

        for channel in channels
            .iter()
            .filter(|c| request.matches_channel(c.name()))
        {
            channels_scanned += 1;
            let history = self.paginator.fetch_all(platform, channel).await;
            if !history.is_complete() {
                warn!(channel = %channel.name(), "Channel history only partially scanned");
                partial_channels.push(channel.name().clone());
            }

            let messages = history.into_messages();
            messages_scanned += messages.len();
            for message in messages {
                let data = extract_fields(request.keys().as_slice(), message.content());
                if !data.is_empty() {
                    records.push(ResultRecord::new(message.author().clone(), data));
                }
            }
        }

        info!(
            channels_scanned,
            messages_scanned,
            records = records.len(),
            partial = partial_channels.len(),
            "Extraction collected"
        );

        Ok(ExtractionOutcome {
            records,
            channels_scanned,
            messages_scanned,
            partial_channels,
        })
    }

    /// Collect records and report them to `reply_channel`.
    ///
    /// # Errors
    ///
    /// Returns error if channel listing or reporting fails.
    #[instrument(
        skip(self, platform, request),
        fields(guild_id = %guild, reply_channel = %reply_channel)
    )]
    pub async fn run(
        &self,
        platform: &dyn ChatPlatform,
        guild: GuildId,
        reply_channel: ChannelId,
        request: &ExtractionRequest,
    ) -> GleanerResult<ExtractionOutcome> {
        let outcome = self.collect(platform, guild, request).await?;
        let delivery = self
            .reporter
            .report(platform, reply_channel, outcome.records())
            .await?;
        info!(?delivery, "Results reported");
        Ok(outcome)
    }
}
