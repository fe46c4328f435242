//! Result reporting error types.

/// Kinds of reporting errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ReportErrorKind {
    /// Failed to create the staging directory
    #[display("Failed to create staging directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to write the staging file
    #[display("Failed to write staging file: {}", _0)]
    FileWrite(String),
    /// Failed to remove the staging file after upload
    #[display("Failed to remove staging file: {}", _0)]
    FileRemove(String),
}

/// Reporting error with location tracking.
///
/// # Examples
///
/// ```
/// use gleaner_error::{ReportError, ReportErrorKind};
///
/// let err = ReportError::new(ReportErrorKind::FileWrite("results.txt".to_string()));
/// assert!(format!("{}", err).contains("staging file"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Report Error: {} at line {} in {}", kind, line, file)]
pub struct ReportError {
    /// The kind of error that occurred
    pub kind: ReportErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ReportError {
    /// Create a new report error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ReportErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
