//! Command-line interface.

use clap::Parser;
use std::num::NonZeroU64;
use std::path::PathBuf;

/// Gleaner - extract key/value pairs from Discord channel history
#[derive(Parser, Debug)]
#[command(name = "gleaner")]
#[command(about = "Discord bot that extracts key/value pairs from channel history")]
#[command(version)]
pub struct Cli {
    /// Discord bot token
    #[arg(long, env = "TOKEN", hide_env_values = true)]
    pub token: String,

    /// Guild the /extract command is registered in
    #[arg(long, env = "GUILD_ID")]
    pub guild_id: NonZeroU64,

    /// Extra configuration file, applied over the default locations
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Upload oversized reports as a file attachment
    #[arg(long)]
    pub file_output: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_flags() {
        let cli = Cli::try_parse_from([
            "gleaner",
            "--token",
            "abc",
            "--guild-id",
            "123456789012345678",
            "--file-output",
        ])
        .expect("Valid arguments");

        assert_eq!(cli.token, "abc");
        assert_eq!(cli.guild_id.get(), 123456789012345678);
        assert!(cli.file_output);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_rejects_zero_guild_id() {
        let result = Cli::try_parse_from(["gleaner", "--token", "abc", "--guild-id", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_non_numeric_guild_id() {
        let result = Cli::try_parse_from(["gleaner", "--token", "abc", "--guild-id", "general"]);
        assert!(result.is_err());
    }
}
