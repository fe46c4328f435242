//! Discord integration for Gleaner.
//!
//! This crate connects the platform-neutral extraction flow in
//! `gleaner_core` to Discord using the Serenity library.
//!
//! # Architecture
//!
//! - **session**: [`DiscordSession`], the `ChatPlatform` implementation over Serenity's HTTP client
//! - **commands**: the `/extract` slash command definition and option parsing
//! - **handler**: event handler that registers the command and answers interactions
//! - **client**: [`GleanerBot`], client setup and lifecycle
//! - **error**: mapping Serenity errors onto platform errors
//!
//! # Usage
//!
//! ```rust,ignore
//! use gleaner_core::GleanerConfig;
//! use gleaner_discord::GleanerBot;
//!
//! let config = GleanerConfig::load()?;
//! let mut bot = GleanerBot::new(token, guild_id, &config).await?;
//! bot.start().await?;
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod commands;
mod error;
mod handler;
mod session;

pub use client::GleanerBot;
pub use commands::{CHANNEL_SUFFIX_OPTION, KEYS_OPTION, extract_command, parse_request};
pub use handler::GleanerHandler;
pub use session::{DiscordSession, has_history};
