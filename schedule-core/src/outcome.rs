use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Normalized `{success, message, data?}` shape every endpoint answers with.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiOutcome {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ApiOutcome {
    /// Outcome produced without a server response (validation or transport).
    pub fn local_error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    /// Normalize a decoded response body.
    ///
    /// `success` follows JSON truthiness. When `message` is missing the
    /// framework-level `detail` field is used instead, since HTTP errors raised
    /// by the backend routers carry only that.
    pub fn from_body(body: &Value) -> Self {
        let success = body.get("success").is_some_and(is_truthy);
        let message = match body.get("message") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => body.get("detail").map(describe).unwrap_or_default(),
            Some(other) => describe(other),
        };
        let data = body.get("data").filter(|d| !d.is_null()).cloned();
        Self {
            success,
            message,
            data,
        }
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// JavaScript truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Failure of one request/response exchange.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, CORS...).
    #[error("{0}")]
    Transport(String),

    /// A response arrived but its body is not JSON.
    #[error("{0}")]
    InvalidBody(String),

    /// The payload could not be encoded.
    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),

    /// Well-formed response with a non-2xx status or a falsy `success`.
    #[error("HTTP {status}: {}", outcome.message)]
    Rejected { status: u16, outcome: ApiOutcome },
}

impl ApiError {
    /// Whether the failure happened below the API level.
    pub fn is_network(&self) -> bool {
        !matches!(self, Self::Rejected { .. })
    }

    /// The outcome to display: the server body verbatim for rejections, the
    /// raw failure text otherwise.
    pub fn outcome(&self) -> ApiOutcome {
        match self {
            Self::Rejected { outcome, .. } => outcome.clone(),
            other => ApiOutcome::local_error(other.to_string()),
        }
    }
}
