//! Platform-neutral views of guilds, channels and messages.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Guild (server) identifier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("{}", _0)]
pub struct GuildId(pub u64);

/// Channel identifier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("{}", _0)]
pub struct ChannelId(pub u64);

/// Message identifier. Ids grow with posting time.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("{}", _0)]
pub struct MessageId(pub u64);

/// A named message stream within a guild.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Channel {
    /// Channel id
    id: ChannelId,
    /// Channel name, without the leading `#`
    name: String,
}

impl Channel {
    /// Create a channel view.
    pub fn new(id: impl Into<ChannelId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A message as read from channel history.
///
/// Read-only; the platform owns the original.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct Message {
    /// Message id
    id: MessageId,
    /// Author's username
    author: String,
    /// Raw text content
    #[builder(default)]
    content: String,
}

impl Message {
    /// Create a message view.
    pub fn new(
        id: impl Into<MessageId>,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            content: content.into(),
        }
    }
}
