//! Chat platform error types.
//!
//! Covers failures talking to the chat platform: API calls, login, command
//! options and interaction responses.

use derive_getters::Getters;

/// Chat platform error variants.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum PlatformErrorKind {
    /// Platform API error (HTTP error, gateway error, rate limit).
    #[display("Platform API error: {_0}")]
    Api(String),

    /// Command was invoked outside of a guild.
    #[display("Command '{_0}' must be used inside a guild")]
    NotInGuild(String),

    /// Bot token is invalid or expired.
    #[display("Invalid or expired bot token")]
    InvalidToken,

    /// The platform client could not be constructed.
    #[display("Client setup failed: {_0}")]
    ClientSetup(String),

    /// Message or attachment failed to send.
    #[display("Message send failed: {_0}")]
    MessageSendFailed(String),

    /// Interaction response failed.
    #[display("Interaction failed: {_0}")]
    InteractionFailed(String),

    /// Required command option was not supplied.
    #[display("Missing required option '{option}' for command '{command}'")]
    MissingOption {
        /// Command name.
        command: String,
        /// Option name.
        option: String,
    },

    /// Command option has the wrong type or value.
    #[display("Invalid option '{option}' for command '{command}': {reason}")]
    InvalidOption {
        /// Command name.
        command: String,
        /// Option name.
        option: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Chat platform error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error, Getters)]
#[display("Platform Error: {} at line {} in {}", kind, line, file)]
pub struct PlatformError {
    kind: PlatformErrorKind,
    line: u32,
    file: &'static str,
}

impl PlatformError {
    /// Create a new PlatformError with automatic location tracking.
    ///
    /// # Example
    /// ```
    /// use gleaner_error::{PlatformError, PlatformErrorKind};
    ///
    /// let err = PlatformError::new(PlatformErrorKind::InvalidToken);
    /// assert_eq!(err.kind(), &PlatformErrorKind::InvalidToken);
    /// ```
    #[track_caller]
    pub fn new(kind: PlatformErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Result type for chat platform operations.
pub type PlatformResult<T> = Result<T, PlatformError>;
