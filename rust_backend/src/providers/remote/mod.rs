//! Remote provider implementations over HTTP.
//!
//! Each client is a thin wrapper: build the request, enforce the configured
//! timeout, map transport and status failures onto [`ProviderError`]. No
//! retries and no caching live here; recovery policy belongs to the caller.

mod gateway;
mod twilio;
mod youtube;

pub use gateway::ImageryGateway;
pub use twilio::TwilioDispatcher;
pub use youtube::YoutubeContentLookup;

use super::error::ProviderError;

/// Map a reqwest failure onto the provider error taxonomy.
pub(crate) fn map_transport_error(context: &str, err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Timeout(format!("{}: {}", context, err))
    } else if err.is_connect() {
        ProviderError::ConnectionError(format!("{}: {}", context, err))
    } else {
        ProviderError::QueryError(format!("{}: {}", context, err))
    }
}
