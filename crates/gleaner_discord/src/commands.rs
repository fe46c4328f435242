//! The `/extract` slash command.

use gleaner_core::{ExtractCommand, ExtractionRequest};
use gleaner_error::{PlatformError, PlatformErrorKind, PlatformResult};
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::CommandOptionType;

/// Option holding the channel-name suffix.
pub const CHANNEL_SUFFIX_OPTION: &str = "channelsuffix";

/// Option holding the comma-separated keys.
pub const KEYS_OPTION: &str = "keys";

/// Build the `/extract` command definition for registration.
pub fn extract_command() -> CreateCommand {
    CreateCommand::new(ExtractCommand::NAME)
        .description("Extracts data from messages based on parameters")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                CHANNEL_SUFFIX_OPTION,
                "The suffix for channels to search",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                KEYS_OPTION,
                "Comma-separated list of keys",
            )
            .required(true),
        )
}

/// Build an extraction request from `(name, string value)` option pairs.
///
/// A value of `None` means the option was present with a non-string type.
///
/// # Errors
///
/// Returns error if either option is missing or not a string.
pub fn parse_request<'a>(
    options: impl IntoIterator<Item = (&'a str, Option<&'a str>)>,
) -> PlatformResult<ExtractionRequest> {
    let mut suffix = None;
    let mut keys = None;
    for (name, value) in options {
        match name {
            CHANNEL_SUFFIX_OPTION => suffix = Some(string_value(name, value)?),
            KEYS_OPTION => keys = Some(string_value(name, value)?),
            _ => {}
        }
    }

    let suffix = suffix.ok_or_else(|| missing(CHANNEL_SUFFIX_OPTION))?;
    let keys = keys.ok_or_else(|| missing(KEYS_OPTION))?;
    Ok(ExtractionRequest::parse(suffix, keys))
}

fn string_value<'a>(name: &str, value: Option<&'a str>) -> PlatformResult<&'a str> {
    value.ok_or_else(|| {
        PlatformError::new(PlatformErrorKind::InvalidOption {
            command: ExtractCommand::NAME.to_string(),
            option: name.to_string(),
            reason: "Must be a string".to_string(),
        })
    })
}

#[track_caller]
fn missing(option: &str) -> PlatformError {
    PlatformError::new(PlatformErrorKind::MissingOption {
        command: ExtractCommand::NAME.to_string(),
        option: option.to_string(),
    })
}
