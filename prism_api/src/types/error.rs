//! The error structure carried by `status` objects and flat error bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::meta::null_as_empty;

/// Structured error reported by the API. A `state` of `ERROR` marks a
/// failed call; any other state is informational.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message_list: Vec<MessageResource>,
    #[serde(default)]
    pub state: String,
}

impl ErrorResponse {
    pub fn is_error(&self) -> bool {
        self.state == "ERROR"
    }
}

/// One entry of an error's `message_list`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MessageResource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub reason: String,
}
