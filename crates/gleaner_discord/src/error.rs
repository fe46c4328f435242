//! Serenity error mapping.

use gleaner_error::{PlatformError, PlatformErrorKind};
use serenity::gateway::GatewayError;

/// Map a Serenity error onto a platform error, keeping `context` in the message.
#[track_caller]
pub(crate) fn platform_error(context: &str, err: serenity::Error) -> PlatformError {
    let kind = match err {
        serenity::Error::Gateway(GatewayError::InvalidAuthentication) => {
            PlatformErrorKind::InvalidToken
        }
        other => PlatformErrorKind::Api(format!("{}: {}", context, other)),
    };
    PlatformError::new(kind)
}

/// Map a failure to build the Serenity client.
#[track_caller]
pub(crate) fn setup_error(err: serenity::Error) -> PlatformError {
    PlatformError::new(PlatformErrorKind::ClientSetup(format!(
        "Failed to build client: {}",
        err
    )))
}
