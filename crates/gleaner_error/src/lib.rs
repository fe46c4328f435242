//! Error types for the Gleaner bot.
//!
//! This crate provides the error types shared by every Gleaner crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use gleaner_error::{ConfigError, GleanerResult};
//!
//! fn load() -> GleanerResult<u8> {
//!     Err(ConfigError::new("batch_size must be between 1 and 100"))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod json;
mod platform;
mod report;

pub use config::ConfigError;
pub use error::{GleanerError, GleanerErrorKind, GleanerResult};
pub use json::JsonError;
pub use platform::{PlatformError, PlatformErrorKind, PlatformResult};
pub use report::{ReportError, ReportErrorKind};
