//! User records, the fetch error taxonomy, and the sources that produce them.
//!
//! A [`UserSource`] is the single seam between the widget and the network: it
//! issues one request bounded by a timeout and returns either the decoded
//! records or a classified [`FetchError`]. Rendering decisions stay with the
//! caller.

mod errors;
mod types;

#[cfg(not(target_arch = "wasm32"))]
mod client;

pub use errors::{FetchError, NETWORK_MESSAGE, TIMEOUT_MESSAGE};
pub use types::{Address, CITY_FALLBACK, User, decode_users};

#[cfg(not(target_arch = "wasm32"))]
pub use client::HttpUserSource;

/// Produces the list of users to display.
///
/// Implementations must settle within their configured timeout and never
/// retry on their own.
#[allow(async_fn_in_trait)]
pub trait UserSource {
    /// Issues one request for the user list.
    ///
    /// # Errors
    /// Returns a [`FetchError`] classifying the failure.
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError>;
}
