//! Channel history scanning and key/value extraction for Gleaner.
//!
//! This crate holds everything about the `/extract` command that does not
//! depend on a particular chat platform:
//!
//! - **Field extraction**: find a key in message text and take the next line
//! - **Pagination**: walk a channel's full history page by page
//! - **Reporting**: render result records and deliver them inline or as a file
//! - **Command flow**: select channels by suffix, scan, extract, report
//! - **Configuration**: layered TOML settings
//!
//! Platform access goes through the [`ChatPlatform`] trait, a session handle
//! passed explicitly into every operation that talks to the network.
//!
//! # Example
//!
//! ```rust,ignore
//! use gleaner_core::{ExtractCommand, ExtractionRequest, GleanerConfig};
//!
//! let config = GleanerConfig::load()?;
//! let command = ExtractCommand::from_config(&config);
//! let request = ExtractionRequest::parse("-log", "name, score");
//! let outcome = command.run(&session, guild_id, reply_channel, &request).await?;
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod command;
mod config;
mod extractor;
mod model;
mod paginator;
mod platform;
mod record;
mod reporter;
mod request;

pub use command::{CONFIRMATION, ExtractCommand, ExtractionOutcome, FAILURE_NOTICE};
pub use config::{GleanerConfig, OutputConfig, PaginationConfig};
pub use extractor::{extract_fields, extract_value};
pub use model::{Channel, ChannelId, GuildId, Message, MessageBuilder, MessageId};
pub use paginator::{History, Paginator, ScanStatus};
pub use platform::{ChatPlatform, PageRequest};
pub use record::{FieldMap, ResultRecord};
pub use reporter::{Delivery, Reporter, ReporterBuilder, render};
pub use request::ExtractionRequest;
