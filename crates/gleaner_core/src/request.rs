//! Parsed `/extract` arguments.

use derive_getters::Getters;

/// What to scan and which keys to look for.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ExtractionRequest {
    /// Channels whose name ends with this suffix are scanned
    channel_suffix: String,
    /// Keys in request order, trimmed, duplicates and empties kept
    keys: Vec<String>,
}

impl ExtractionRequest {
    /// Parse the raw command options.
    ///
    /// `keys` is split on `,` and every entry is trimmed. Empty entries are
    /// kept; an empty key matches every line.
    ///
    /// # Examples
    ///
    /// ```
    /// use gleaner_core::ExtractionRequest;
    ///
    /// let request = ExtractionRequest::parse("-log", "name, score ,rank");
    /// assert_eq!(request.keys(), &["name", "score", "rank"]);
    /// ```
    pub fn parse(channel_suffix: impl Into<String>, keys: &str) -> Self {
        Self {
            channel_suffix: channel_suffix.into(),
            keys: keys.split(',').map(|k| k.trim().to_string()).collect(),
        }
    }

    /// Whether a channel name is selected by this request (case-sensitive).
    pub fn matches_channel(&self, name: &str) -> bool {
        name.ends_with(&self.channel_suffix)
    }
}
