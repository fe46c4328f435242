//! Top-level error wrapper types.

use crate::{ConfigError, JsonError, PlatformError, ReportError};

/// Every error condition a Gleaner operation can end in.
///
/// # Examples
///
/// ```
/// use gleaner_error::{GleanerError, PlatformError, PlatformErrorKind};
///
/// let err: GleanerError = PlatformError::new(PlatformErrorKind::InvalidToken).into();
/// assert!(format!("{}", err).contains("Platform Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum GleanerErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Chat platform error
    #[from(PlatformError)]
    Platform(PlatformError),
    /// Result reporting error
    #[from(ReportError)]
    Report(ReportError),
    /// JSON serialization error
    #[from(JsonError)]
    Json(JsonError),
}

/// Gleaner error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Gleaner Error: {}", _0)]
pub struct GleanerError(Box<GleanerErrorKind>);

impl GleanerError {
    /// Create a new error from a kind.
    pub fn new(kind: GleanerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &GleanerErrorKind {
        &self.0
    }
}

impl<T> From<T> for GleanerError
where
    T: Into<GleanerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Gleaner operations.
pub type GleanerResult<T> = std::result::Result<T, GleanerError>;
