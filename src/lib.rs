//! # userfetch
//!
//! Fetches a list of user records from a remote JSON endpoint and renders them
//! as HTML cards, with explicit loading and error states.
//!
//! ## Flow
//!
//! 1. **Trigger:** the caller invokes [`UserFetchWidget::fetch_and_display_users`].
//! 2. **Loading:** prior output is cleared, the trigger is disabled and the
//!    loading indicator is shown.
//! 3. **Fetch:** a [`UserSource`] issues one `GET` bounded by a timeout and
//!    returns `Result<Vec<User>, FetchError>`.
//! 4. **Render:** on success the cards (or a "no users" placeholder) are
//!    written to the output container; on failure a classified message is
//!    written to the error display. The trigger is always re-enabled.
//!
//! The widget only talks to its four UI handles through the [`Element`]
//! trait, so the same code drives the browser DOM (`wasm32`) and the
//! in-memory handles used by the `userfetch` CLI and the tests.

pub mod config;
pub mod users;
pub mod widget;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::FetchConfig;
pub use users::{FetchError, User, UserSource};
pub use widget::{Element, Handles, MemoryElement, RequestState, UserFetchWidget};

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

/// User agent sent with every request: `name/version (commit)`.
#[must_use]
pub fn user_agent() -> String {
    format!(
        "{}/{} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        short_commit(GIT_COMMIT_HASH)
    )
}

fn short_commit(hash: &str) -> String {
    let trimmed = hash.trim();
    if trimmed.len() > 7 {
        trimmed.chars().take(7).collect()
    } else {
        trimmed.to_string()
    }
}
