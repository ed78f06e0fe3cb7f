use crate::cli::actions::{Action, fetch::Args};
use crate::config::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_MS, FetchConfig};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// # Errors
/// Returns an error if the endpoint or timeout is invalid.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let url = matches
        .get_one::<String>("url")
        .map_or(DEFAULT_ENDPOINT, String::as_str);
    let timeout_ms = matches
        .get_one::<u64>("timeout")
        .copied()
        .unwrap_or(DEFAULT_TIMEOUT_MS);

    let config = FetchConfig::new(url, timeout_ms).context("invalid fetch configuration")?;
    let output = matches.get_one::<String>("output").map(PathBuf::from);

    Ok(Action::Fetch(Args { config, output }))
}
