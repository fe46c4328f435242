//! Discord session: the `ChatPlatform` implementation.

use crate::error::platform_error;
use async_trait::async_trait;
use gleaner_core::{Channel, ChannelId, ChatPlatform, GuildId, Message, PageRequest};
use gleaner_error::{PlatformError, PlatformErrorKind, PlatformResult};
use serenity::builder::{CreateAttachment, CreateMessage};
use serenity::http::{Http, MessagePagination};
use serenity::model::channel::ChannelType;
use serenity::model::id;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Whether a channel kind carries a message history that can be paged.
///
/// Categories, forums and directories hold no messages of their own; their
/// posts live in threads, which are listed separately.
pub fn has_history(kind: ChannelType) -> bool {
    matches!(
        kind,
        ChannelType::Text
            | ChannelType::News
            | ChannelType::Voice
            | ChannelType::Stage
            | ChannelType::PublicThread
            | ChannelType::PrivateThread
            | ChannelType::NewsThread
    )
}

/// Long-lived Discord session over Serenity's HTTP client.
///
/// Cheap to clone; clones share the client and its rate limiter.
#[derive(Clone)]
pub struct DiscordSession {
    http: Arc<Http>,
}

impl DiscordSession {
    /// Create a session sharing an existing HTTP client.
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

impl std::fmt::Debug for DiscordSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordSession").finish_non_exhaustive()
    }
}

#[async_trait]
impl ChatPlatform for DiscordSession {
    #[instrument(skip(self), fields(guild_id = %guild, channel_count))]
    async fn guild_channels(&self, guild: GuildId) -> PlatformResult<Vec<Channel>> {
        let guild_id = id::GuildId::new(guild.0);
        let mut channels = self
            .http
            .get_channels(guild_id)
            .await
            .map_err(|e| platform_error("Failed to fetch channels", e))?;
        channels.retain(|channel| has_history(channel.kind));
        channels.sort_by_key(|channel| (channel.position, channel.id));

        // Active threads are not part of the channel list; they follow it, oldest first.
        let mut threads = self
            .http
            .get_guild_active_threads(guild_id)
            .await
            .map_err(|e| platform_error("Failed to fetch active threads", e))?
            .threads;
        threads.retain(|thread| has_history(thread.kind));
        threads.sort_by_key(|thread| thread.id);
        channels.extend(threads);

        tracing::Span::current().record("channel_count", channels.len());
        debug!("Fetched guild channels");

        Ok(channels
            .into_iter()
            .map(|channel| Channel::new(channel.id.get(), channel.name))
            .collect())
    }

    #[instrument(
        skip(self),
        fields(channel_id = %channel, limit = *request.limit(), before = ?request.before())
    )]
    async fn fetch_messages(
        &self,
        channel: ChannelId,
        request: PageRequest,
    ) -> PlatformResult<Vec<Message>> {
        let target = request
            .before()
            .map(|before| MessagePagination::Before(id::MessageId::new(before.0)));
        let messages = self
            .http
            .get_messages(id::ChannelId::new(channel.0), target, Some(*request.limit()))
            .await
            .map_err(|e| platform_error("Failed to fetch messages", e))?;

        Ok(messages
            .into_iter()
            .map(|message| Message::new(message.id.get(), message.author.name, message.content))
            .collect())
    }

    #[instrument(skip(self, text), fields(channel_id = %channel, chars = text.chars().count()))]
    async fn send_text(&self, channel: ChannelId, text: &str) -> PlatformResult<()> {
        id::ChannelId::new(channel.0)
            .say(&self.http, text)
            .await
            .map_err(|e| {
                PlatformError::new(PlatformErrorKind::MessageSendFailed(e.to_string()))
            })?;
        Ok(())
    }

    #[instrument(skip(self, path), fields(channel_id = %channel, path = %path.display()))]
    async fn send_file(&self, channel: ChannelId, path: &Path) -> PlatformResult<()> {
        let attachment = CreateAttachment::path(path).await.map_err(|e| {
            PlatformError::new(PlatformErrorKind::MessageSendFailed(format!(
                "Failed to read attachment {}: {}",
                path.display(),
                e
            )))
        })?;

        id::ChannelId::new(channel.0)
            .send_files(&self.http, [attachment], CreateMessage::new())
            .await
            .map_err(|e| {
                PlatformError::new(PlatformErrorKind::MessageSendFailed(e.to_string()))
            })?;
        Ok(())
    }
}
