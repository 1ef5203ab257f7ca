//! Error kinds produced by the HTTP layer

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Every way a geolocation or weather fetch can fail.
///
/// The `Display` text is meant for logs. User-facing text comes from
/// [`crate::messages::error_message`].
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum FetchError {
    /// Geolocation service answered with a non-success status
    #[error("geolocation service reported failure")]
    LocationUnavailable,

    /// Geolocation request or decoding failed
    #[error("geolocation failed: {0}")]
    Location(String),

    /// Weather API answered 2xx but the body `cod` was not 200
    #[error("weather API reported city not found")]
    CityNotFound,

    /// Weather API answered with an HTTP error status
    #[error("weather API returned HTTP {code}: {detail}")]
    Status { code: u16, detail: String },

    #[error("could not connect to weather API")]
    Connection,

    #[error("weather request timed out")]
    Timeout,

    #[error("too many redirects")]
    TooManyRedirects,

    /// Any other request-layer failure, including an undecodable body
    #[error("weather request failed: {0}")]
    Request(String),
}

impl FetchError {
    /// Classify a transport-level reqwest error.
    ///
    /// Connection failures are checked before timeouts so a connect timeout
    /// reports as a connection problem.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return FetchError::Status {
                code: status.as_u16(),
                detail: err.to_string(),
            };
        }
        if err.is_connect() {
            FetchError::Connection
        } else if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_redirect() {
            FetchError::TooManyRedirects
        } else {
            FetchError::Request(err.to_string())
        }
    }
}
