//! CollectAPI response envelope.
//!
//! Every response is `{"success": bool, "message"?: str, "result"?: [...]}`.
//! Records are kept as raw JSON here so one malformed entry does not sink
//! the whole list; the client deserializes them individually.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DutyPharmacyResponse {
    /// Missing counts as failure.
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub result: Option<Vec<serde_json::Value>>,
}

/// Error payload attached to non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub message: Option<String>,
}
