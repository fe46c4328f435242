//! In-memory chat platform for exercising the extraction flow.

#![allow(dead_code)]

use async_trait::async_trait;
use gleaner_core::{Channel, ChannelId, ChatPlatform, GuildId, Message, PageRequest};
use gleaner_error::{PlatformError, PlatformErrorKind, PlatformResult};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Mock platform with scripted channels and histories.
#[derive(Default)]
pub struct MockPlatform {
    guild: Option<GuildId>,
    channels: Vec<Channel>,
    /// Newest first, ids strictly descending.
    histories: HashMap<ChannelId, Vec<Message>>,
    /// Fail the fetch with this zero-based page index.
    fail_on_page: HashMap<ChannelId, usize>,
    fail_send: bool,
    pub fetches: Mutex<Vec<(ChannelId, PageRequest, usize)>>,
    pub texts: Mutex<Vec<(ChannelId, String)>>,
    /// Channel, staged path, and file contents at upload time.
    pub files: Mutex<Vec<(ChannelId, PathBuf, String)>>,
}

impl MockPlatform {
    pub fn new(guild: u64) -> Self {
        Self {
            guild: Some(GuildId(guild)),
            ..Default::default()
        }
    }

    /// Add a channel whose history is `contents`, oldest first.
    pub fn with_channel(mut self, id: u64, name: &str, contents: &[(&str, &str)]) -> Self {
        let messages = contents
            .iter()
            .enumerate()
            .map(|(i, (author, content))| {
                Message::new(id * 10_000 + i as u64 + 1, *author, *content)
            })
            .rev()
            .collect();
        self.channels.push(Channel::new(id, name));
        self.histories.insert(ChannelId(id), messages);
        self
    }

    /// Add a channel with `count` generated messages.
    pub fn with_generated_channel(self, id: u64, name: &str, count: usize) -> Self {
        let contents: Vec<(String, String)> = (0..count)
            .map(|i| (format!("user{}", i), format!("message {}", i)))
            .collect();
        let borrowed: Vec<(&str, &str)> = contents
            .iter()
            .map(|(a, c)| (a.as_str(), c.as_str()))
            .collect();
        self.with_channel(id, name, &borrowed)
    }

    pub fn failing_on_page(mut self, channel: u64, page: usize) -> Self {
        self.fail_on_page.insert(ChannelId(channel), page);
        self
    }

    pub fn failing_sends(mut self) -> Self {
        self.fail_send = true;
        self
    }

    pub fn fetch_count(&self, channel: u64) -> usize {
        self.fetches
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _, _)| *c == ChannelId(channel))
            .count()
    }
}

#[async_trait]
impl ChatPlatform for MockPlatform {
    async fn guild_channels(&self, guild: GuildId) -> PlatformResult<Vec<Channel>> {
        if self.guild != Some(guild) {
            return Err(PlatformError::new(PlatformErrorKind::Api(format!(
                "Unknown Guild: {}",
                guild
            ))));
        }
        Ok(self.channels.clone())
    }

    async fn fetch_messages(
        &self,
        channel: ChannelId,
        request: PageRequest,
    ) -> PlatformResult<Vec<Message>> {
        let page_index = self.fetch_count(channel.0);
        let history = self.histories.get(&channel).cloned().unwrap_or_default();
        let page: Vec<Message> = history
            .into_iter()
            .filter(|m| request.before().is_none_or(|before| *m.id() < before))
            .take(*request.limit() as usize)
            .collect();
        self.fetches
            .lock()
            .unwrap()
            .push((channel, request, page.len()));

        if self.fail_on_page.get(&channel) == Some(&page_index) {
            return Err(PlatformError::new(PlatformErrorKind::Api(
                "Missing Access".to_string(),
            )));
        }
        Ok(page)
    }

    async fn send_text(&self, channel: ChannelId, text: &str) -> PlatformResult<()> {
        if self.fail_send {
            return Err(PlatformError::new(PlatformErrorKind::MessageSendFailed(
                "Cannot send an empty message".to_string(),
            )));
        }
        self.texts.lock().unwrap().push((channel, text.to_string()));
        Ok(())
    }

    async fn send_file(&self, channel: ChannelId, path: &Path) -> PlatformResult<()> {
        if self.fail_send {
            return Err(PlatformError::new(PlatformErrorKind::MessageSendFailed(
                "Request entity too large".to_string(),
            )));
        }
        let contents = std::fs::read_to_string(path).unwrap();
        self.files
            .lock()
            .unwrap()
            .push((channel, path.to_path_buf(), contents));
        Ok(())
    }
}
