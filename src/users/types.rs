use serde::{Deserialize, Serialize};

/// Fallback city text for records without `address.city`.
pub const CITY_FALLBACK: &str = "City not available";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub city: Option<String>,
}

impl User {
    /// City to display; empty or missing values fall back to [`CITY_FALLBACK`].
    #[must_use]
    pub fn city(&self) -> &str {
        self.address
            .as_ref()
            .and_then(|address| address.city.as_deref())
            .filter(|city| !city.is_empty())
            .unwrap_or(CITY_FALLBACK)
    }
}

/// Decodes a response body into users. A JSON `null` is an empty list.
///
/// # Errors
/// Returns the decoder error when the body is not a list of users.
pub fn decode_users(body: &str) -> Result<Vec<User>, serde_json::Error> {
    serde_json::from_str::<Option<Vec<User>>>(body).map(Option::unwrap_or_default)
}
