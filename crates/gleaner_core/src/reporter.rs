//! Result rendering and delivery.
//!
//! Records render as one `<user>: <json>` line each. Delivery is inline
//! text unless file output is enabled and the text is longer than the
//! inline limit, in which case it is staged to a unique file and uploaded.

use crate::{ChannelId, ChatPlatform, OutputConfig, ResultRecord};
use gleaner_error::{GleanerResult, JsonError, ReportError, ReportErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// How a report reached the channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Nothing to send; no records were collected.
    Empty,
    /// Sent as a text message.
    Inline,
    /// Uploaded as a file attachment staged at this path.
    Attachment(PathBuf),
}

/// Render records as newline-separated `<user>: <json of data>` lines.
///
/// # Errors
///
/// Returns error if a record's data fails to serialize.
///
/// # Examples
///
/// ```
/// use gleaner_core::{FieldMap, ResultRecord, render};
///
/// let mut data = FieldMap::default();
/// data.insert("name", Some("Ada".to_string()));
/// let text = render(&[ResultRecord::new("ada", data)]).unwrap();
/// assert_eq!(text, r#"ada: {"name":"Ada"}"#);
/// ```
pub fn render(records: &[ResultRecord]) -> GleanerResult<String> {
    let lines = records
        .iter()
        .map(|record| {
            serde_json::to_string(record.data())
                .map(|json| format!("{}: {}", record.user(), json))
                .map_err(|e| JsonError::new(format!("Failed to encode result data: {}", e)))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}

/// Delivers rendered results to a channel.
#[derive(Debug, Clone, derive_builder::Builder)]
#[builder(setter(into))]
pub struct Reporter {
    /// Upload oversized output as a file
    #[builder(default = "false")]
    file_output: bool,
    /// Character count above which output is oversized
    #[builder(default = "2000")]
    inline_limit: usize,
    /// Directory for staged report files
    #[builder(default = "PathBuf::from(\".\")")]
    staging_dir: PathBuf,
}

impl Reporter {
    /// Default inline message limit in characters.
    pub const INLINE_LIMIT: usize = 2000;

    /// Whether oversized output goes out as a file.
    pub fn file_output(&self) -> bool {
        self.file_output
    }

    /// Whether `text` is sent as a file rather than inline.
    pub fn wants_attachment(&self, text: &str) -> bool {
        self.file_output && text.chars().count() > self.inline_limit
    }

    /// Render `records` and deliver them to `channel`.
    ///
    /// # Errors
    ///
    /// Returns error if rendering, staging or sending fails.
    #[instrument(
        skip(self, platform, records),
        fields(channel_id = %channel, records = records.len())
    )]
    pub async fn report(
        &self,
        platform: &dyn ChatPlatform,
        channel: ChannelId,
        records: &[ResultRecord],
    ) -> GleanerResult<Delivery> {
        let output = render(records)?;
        if output.is_empty() {
            info!("No results to report");
            return Ok(Delivery::Empty);
        }

        if !self.wants_attachment(&output) {
            debug!(chars = output.chars().count(), "Sending results inline");
            platform.send_text(channel, &output).await?;
            return Ok(Delivery::Inline);
        }

        let path = self.stage(&output).await?;
        info!(path = %path.display(), "Sending results as attachment");
        let sent = platform.send_file(channel, &path).await;
        remove_staged(&path).await;
        sent?;
        Ok(Delivery::Attachment(path))
    }

    async fn stage(&self, output: &str) -> GleanerResult<PathBuf> {
        tokio::fs::create_dir_all(&self.staging_dir)
            .await
            .map_err(|e| {
                ReportError::new(ReportErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    self.staging_dir.display(),
                    e
                )))
            })?;

        let path = self
            .staging_dir
            .join(format!("results-{}.txt", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, output).await.map_err(|e| {
            ReportError::new(ReportErrorKind::FileWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
        })?;
        Ok(path)
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self {
            file_output: false,
            inline_limit: Self::INLINE_LIMIT,
            staging_dir: PathBuf::from("."),
        }
    }
}

impl From<&OutputConfig> for Reporter {
    fn from(config: &OutputConfig) -> Self {
        Self {
            file_output: *config.file_output(),
            inline_limit: *config.inline_limit(),
            staging_dir: config.staging_dir().clone(),
        }
    }
}

async fn remove_staged(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        let err = ReportError::new(ReportErrorKind::FileRemove(format!(
            "{}: {}",
            path.display(),
            e
        )));
        warn!(error = %err, "Staged report left on disk");
    }
}
