//! Full channel history pagination.

use crate::{Channel, ChatPlatform, Message, PageRequest};
use derive_getters::Getters;
use tracing::{debug, info, instrument, warn};

/// How a history scan ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanStatus {
    /// An empty page was returned; the whole history was read.
    Complete,
    /// A fetch failed; only the messages before the failure were read.
    Partial {
        /// The fetch error, as text
        reason: String,
    },
}

/// Messages read from one channel, newest first, plus how the scan ended.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct History {
    /// Collected messages in fetch order
    messages: Vec<Message>,
    /// Whether the scan reached the start of the channel
    status: ScanStatus,
}

impl History {
    /// Whether the whole history was read.
    pub fn is_complete(&self) -> bool {
        self.status == ScanStatus::Complete
    }

    /// Take the collected messages.
    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}

/// Walks a channel's history page by page, newest to oldest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    batch_size: u8,
}

impl Paginator {
    /// Largest page the platform serves.
    pub const MAX_BATCH_SIZE: u8 = 100;

    /// Create a paginator. `batch_size` is clamped to `1..=100`.
    pub fn new(batch_size: u8) -> Self {
        Self {
            batch_size: batch_size.clamp(1, Self::MAX_BATCH_SIZE),
        }
    }

    /// Messages requested per page.
    pub fn batch_size(&self) -> u8 {
        self.batch_size
    }

    /// Read every message ever posted to `channel`.
    ///
    /// Each page asks for messages strictly older than the last (oldest)
    /// message of the previous page. The first empty page ends the scan.
    /// There is no cap, no retry and no cancellation.
    ///
    /// A failed fetch never surfaces as an error: it is logged and the
    /// messages gathered so far come back with [`ScanStatus::Partial`].
    #[instrument(
        skip(self, platform, channel),
        fields(channel_id = %channel.id(), channel = %channel.name(), pages, messages)
    )]
    pub async fn fetch_all(&self, platform: &dyn ChatPlatform, channel: &Channel) -> History {
        let mut messages: Vec<Message> = Vec::new();
        let mut before = None;
        let mut pages = 0usize;

        let status = loop {
            let request = PageRequest::new(self.batch_size, before);
            match platform.fetch_messages(*channel.id(), request).await {
                Ok(batch) => {
                    let Some(last) = batch.last() else {
                        break ScanStatus::Complete;
                    };
                    before = Some(*last.id());
                    pages += 1;
                    debug!(
                        page = pages,
                        size = batch.len(),
                        before = ?before,
                        "Fetched history page"
                    );
                    messages.extend(batch);
                }
                Err(e) => {
                    warn!(
                        channel = %channel.name(),
                        error = %e,
                        collected = messages.len(),
                        "Error fetching messages, keeping partial history"
                    );
                    break ScanStatus::Partial {
                        reason: e.to_string(),
                    };
                }
            }
        };

        tracing::Span::current().record("pages", pages);
        tracing::Span::current().record("messages", messages.len());
        info!(pages, messages = messages.len(), "Channel history scanned");

        History { messages, status }
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(Self::MAX_BATCH_SIZE)
    }
}
