//! Browser transport built on `fetch`, with an abort timeout so the UI never
//! hangs in the loading state.

use crate::{
    config::FetchConfig,
    users::{FetchError, User, UserSource, decode_users},
};
use gloo_net::http::{Request, Response};
use gloo_timers::callback::Timeout;
use tracing::debug;
use web_sys::AbortController;

#[derive(Clone, Debug)]
pub struct BrowserUserSource {
    config: FetchConfig,
}

impl BrowserUserSource {
    #[must_use]
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }

    /// Sends the request, aborting it once the timeout elapses.
    async fn send_with_timeout(&self) -> Result<Response, FetchError> {
        let controller = AbortController::new()
            .map_err(|_| FetchError::Config("Failed to initialize request timeout.".to_string()))?;
        let signal = controller.signal();
        let timeout_controller = controller.clone();
        let timeout_ms = u32::try_from(self.config.timeout_ms()).unwrap_or(u32::MAX);
        // Dropping the timer cancels it once the response has arrived.
        let _timeout = Timeout::new(timeout_ms, move || timeout_controller.abort());

        let request = Request::get(self.config.endpoint.as_str())
            .header("Accept", "application/json")
            .abort_signal(Some(&signal))
            .build()
            .map_err(|err| FetchError::Config(format!("Failed to build request: {err}")))?;

        request.send().await.map_err(|err| {
            if signal.aborted() {
                FetchError::Timeout(self.config.timeout)
            } else {
                FetchError::Network(err.to_string())
            }
        })
    }
}

impl UserSource for BrowserUserSource {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        debug!(endpoint = %self.config.endpoint, "fetching users");
        let response = self.send_with_timeout().await?;

        if !response.ok() {
            return Err(FetchError::Http {
                status: response.status(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        decode_users(&body).map_err(|err| FetchError::Parse(err.to_string()))
    }
}
