//! Endpoint and timeout configuration shared by every transport.
//!
//! In the browser the values come from build-time environment variables with
//! an optional runtime override read from `window.USERFETCH_CONFIG`, so static
//! deployments can point the widget elsewhere without rebuilding. The CLI
//! builds the same struct from its arguments.

use crate::users::FetchError;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchConfig {
    pub endpoint: Url,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl FetchConfig {
    /// Builds a config from a raw endpoint and a timeout in milliseconds.
    ///
    /// # Errors
    /// Returns [`FetchError::Config`] if the endpoint is not an http(s) URL or
    /// the timeout is zero.
    pub fn new(endpoint: &str, timeout_ms: u64) -> Result<Self, FetchError> {
        let endpoint = parse_endpoint(endpoint)?;
        if timeout_ms == 0 {
            return Err(FetchError::Config(
                "timeout must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            endpoint,
            timeout: Duration::from_millis(timeout_ms),
        })
    }

    /// Loads config from build-time environment variables and applies runtime overrides.
    ///
    /// Invalid build-time values fall back to the defaults; an invalid runtime
    /// override is logged and the value it would have replaced is kept.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::from_build_env(
            option_env!("USERFETCH_ENDPOINT"),
            option_env!("USERFETCH_TIMEOUT_MS"),
        );

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    fn from_build_env(endpoint: Option<&str>, timeout_ms: Option<&str>) -> Self {
        let endpoint = endpoint.unwrap_or(DEFAULT_ENDPOINT);
        let timeout_ms = timeout_ms
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        Self::new(endpoint, timeout_ms).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "invalid build-time configuration, using defaults");
            Self::default()
        })
    }

    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

// The constant is a valid absolute URL.
#[allow(clippy::expect_used)]
fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL")
}

/// Parses an endpoint and rejects anything other than http(s).
///
/// # Errors
/// Returns [`FetchError::Config`] describing the rejected value.
pub fn parse_endpoint(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw.trim())
        .map_err(|err| FetchError::Config(format!("invalid endpoint {raw}: {err}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(FetchError::Config(format!(
            "invalid endpoint {raw}: unsupported scheme {scheme}"
        ))),
    }
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[derive(Default)]
struct RuntimeConfig {
    endpoint: Option<String>,
    timeout_ms: Option<u64>,
}

/// Applies each override that validates on its own.
fn apply_runtime_overrides(config: &mut FetchConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.endpoint {
        match parse_endpoint(&value) {
            Ok(endpoint) => config.endpoint = endpoint,
            Err(err) => tracing::warn!(error = %err, "ignoring runtime endpoint override"),
        }
    }
    match runtime.timeout_ms {
        Some(0) => tracing::warn!("ignoring runtime timeout override of 0 ms"),
        Some(value) => config.timeout = Duration::from_millis(value),
        None => {}
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("USERFETCH_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        endpoint: read_runtime_value(&object, "endpoint"),
        timeout_ms: read_runtime_timeout(&object),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_timeout(object: &js_sys::Object) -> Option<u64> {
    let value =
        js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str("timeout_ms")).ok()?;
    if let Some(number) = value.as_f64() {
        return timeout_from_f64(number);
    }
    normalize_runtime_value(&value.as_string()?)?.parse().ok()
}

/// Whole milliseconds from a JS number; non-finite values and anything
/// below 1 are rejected.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn timeout_from_f64(number: f64) -> Option<u64> {
    if number.is_finite() && number >= 1.0 {
        Some(number.trunc() as u64)
    } else {
        None
    }
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
