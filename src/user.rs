/// User record embedded in an authenticated account
///
/// The platform's user model is large and evolves independently of this
/// crate; only the handful of fields the session layer reads are typed
/// here. Everything else is carried through `extra` untouched so a
/// decode/encode cycle never drops data.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A platform user, as embedded in token-exchange responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Canonical resource URI, e.g. "/users/152184"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Public profile URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,

    /// Account registration time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,

    /// Subscription tier ("basic", "plus", "pro", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    /// Unmodeled fields, preserved verbatim across round-trips
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
