//! Accessors for the raw range search payload.
//!
//! The payload is kept as untyped JSON: its shape varies (singletons are
//! sent as bare objects) and everything besides the point list is passed
//! through to the caller untouched.

use serde_json::Value;

/// Error code the API returns once a key has used up its quota.
pub const CREDENTIAL_EXHAUSTED: &str = "W403";

/// The `ResultSet` object, if present.
pub fn result_set(raw: &Value) -> Option<&Value> {
    raw.get("ResultSet")
}

/// The `ResultSet.Error.code` value, if the payload carries an error.
pub fn error_code(raw: &Value) -> Option<&str> {
    result_set(raw)?.get("Error")?.get("code")?.as_str()
}

/// The `ResultSet.Error.Message` value, if any.
pub fn error_message(raw: &Value) -> Option<&str> {
    result_set(raw)?.get("Error")?.get("Message")?.as_str()
}

/// Whether the payload says the key in use is exhausted.
pub fn is_credential_exhausted(raw: &Value) -> bool {
    error_code(raw) == Some(CREDENTIAL_EXHAUSTED)
}
