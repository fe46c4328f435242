//! Chat platform session trait.

use crate::{Channel, ChannelId, GuildId, Message, MessageId};
use async_trait::async_trait;
use derive_getters::Getters;
use gleaner_error::PlatformResult;
use std::path::Path;

/// One page of channel history to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct PageRequest {
    /// Maximum number of messages in the page
    limit: u8,
    /// Only return messages strictly older than this one
    before: Option<MessageId>,
}

impl PageRequest {
    /// Create a page request.
    pub fn new(limit: u8, before: Option<MessageId>) -> Self {
        Self { limit, before }
    }
}

/// Long-lived session with a chat platform.
///
/// One handle is created at startup and passed to every operation that
/// needs the network. Implementations must be safe to share between
/// concurrent command invocations.
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// List every channel of a guild.
    ///
    /// # Errors
    ///
    /// Returns error if the guild is unknown or the API call fails.
    async fn guild_channels(&self, guild: GuildId) -> PlatformResult<Vec<Channel>>;

    /// Fetch one page of channel history, newest message first.
    ///
    /// An empty page means there is nothing older than `request.before()`.
    ///
    /// # Errors
    ///
    /// Returns error if the API call fails (permissions, rate limit, network).
    async fn fetch_messages(
        &self,
        channel: ChannelId,
        request: PageRequest,
    ) -> PlatformResult<Vec<Message>>;

    /// Post a text message to a channel.
    async fn send_text(&self, channel: ChannelId, text: &str) -> PlatformResult<()>;

    /// Upload a local file to a channel as an attachment.
    async fn send_file(&self, channel: ChannelId, path: &Path) -> PlatformResult<()>;
}
