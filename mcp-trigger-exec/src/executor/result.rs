use serde::Serialize;
use serde_json::Value as JsonValue;

/// Per-item failure downgraded by continue-on-fail. Serializes as
/// `{"error": "<message>"}` and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutputRecord {
    Json(JsonValue),
    Error(ErrorRecord),
}

impl OutputRecord {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(ErrorRecord {
            error: message.into(),
        })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchError {
    #[error("no endpoint selected to trigger.")]
    NoEndpointSelected,
    #[error("failed to trigger endpoint '{endpoint}': {message}")]
    EndpointFailed { endpoint: String, message: String },
}
