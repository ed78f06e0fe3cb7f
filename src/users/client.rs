//! Native HTTP transport for the user list.
//!
//! The request is raced against a timer; whichever settles first decides the
//! outcome. The body is decoded only after a success status.

use super::{FetchError, User, UserSource, decode_users};
use crate::config::FetchConfig;
use reqwest::{Client, header::ACCEPT};
use tracing::{Instrument, debug, info_span};

#[derive(Clone, Debug)]
pub struct HttpUserSource {
    client: Client,
    config: FetchConfig,
}

impl HttpUserSource {
    /// Builds a source for the configured endpoint.
    ///
    /// # Errors
    /// Returns [`FetchError::Config`] if the HTTP client cannot be initialized.
    pub fn new(config: FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(crate::user_agent())
            .build()
            .map_err(|err| FetchError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    async fn send(&self) -> Result<Vec<User>, FetchError> {
        let span = info_span!(
            "users.fetch",
            http.method = "GET",
            url = %self.config.endpoint
        );

        let request = self
            .client
            .get(self.config.endpoint.clone())
            .header(ACCEPT, "application/json")
            .send()
            .instrument(span);

        let response = tokio::time::timeout(self.config.timeout, request)
            .await
            .map_err(|_| FetchError::Timeout(self.config.timeout))?
            .map_err(|err| map_request_error(&err, &self.config))?;

        let status = response.status();
        debug!(status = status.as_u16(), "response received");

        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|err| map_request_error(&err, &self.config))?;

        decode_users(&body).map_err(|err| FetchError::Parse(err.to_string()))
    }
}

impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        debug!(
            endpoint = %self.config.endpoint,
            timeout_ms = self.config.timeout_ms(),
            "fetching users"
        );
        self.send().await
    }
}

/// Maps transport errors into timeout or network failures.
fn map_request_error(err: &reqwest::Error, config: &FetchConfig) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout(config.timeout)
    } else if err.is_builder() {
        FetchError::Config(format!("Failed to build request: {err}"))
    } else {
        FetchError::Network(err.to_string())
    }
}
