use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use ainventory_infra::uploads::StoredUpload;

// -------------------------
// Request DTOs
// -------------------------

/// Raw query string pairs in request order.
///
/// A repeated key resolves to its first value.
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Body of `POST /api/data`.
///
/// Any JSON value is accepted. A missing or non-string `action` is an unknown
/// action, and a missing `data` echoes as `null`.
#[derive(Debug, Default, PartialEq)]
pub struct DataCommandRequest {
    pub action: Option<String>,
    pub data: JsonValue,
}

impl DataCommandRequest {
    pub fn from_json(body: &JsonValue) -> Self {
        Self {
            action: body
                .get("action")
                .and_then(JsonValue::as_str)
                .map(str::to_string),
            data: body.get("data").cloned().unwrap_or(JsonValue::Null),
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    #[serde(flatten)]
    pub upload: StoredUpload,
}
