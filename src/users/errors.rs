use std::time::Duration;
use thiserror::Error;

/// Shown when the request does not settle before the timeout.
pub const TIMEOUT_MESSAGE: &str =
    "Request timeout. Please check your internet connection and try again.";
/// Shown for transport-level failures.
pub const NETWORK_MESSAGE: &str = "Network error. Please check your internet connection.";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("request timed out after {} ms", .0.as_millis())]
    Timeout(Duration),
    #[error("failed to fetch: {0}")]
    Network(String),
    #[error("HTTP error! Status: {status}")]
    Http { status: u16 },
    #[error("{0}")]
    Parse(String),
    #[error("{0}")]
    Config(String),
}

impl FetchError {
    /// Message for the error display.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Timeout(_) => TIMEOUT_MESSAGE.to_string(),
            Self::Network(_) => NETWORK_MESSAGE.to_string(),
            Self::Http { .. } | Self::Parse(_) | Self::Config(_) => format!("Error: {self}"),
        }
    }
}
