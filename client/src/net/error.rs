//! Error classification for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Cancellation is a normal outcome of navigating or retyping a query, so it
//! gets its own variant. Components check `is_aborted` and stay silent for it;
//! every other variant degrades to an empty or inline error state.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

/// Failure of a single API request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request was cancelled through its abort signal.
    #[error("request aborted")]
    Aborted,

    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("unexpected status {status}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Called outside the browser (server rendering).
    #[error("API not available outside the browser")]
    Unavailable,
}

impl ApiError {
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }

    /// Per-field validation messages carried by a 400 response, if any.
    #[must_use]
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            Self::Status { status: 400, body } => FieldErrors::from_body(body),
            _ => FieldErrors::default(),
        }
    }

    /// Map a transport failure, preferring `Aborted` when the signal fired.
    #[cfg(feature = "hydrate")]
    pub(crate) fn from_transport(err: gloo_net::Error, aborted: bool) -> Self {
        if aborted {
            return Self::Aborted;
        }
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            gloo_net::Error::JsError(e) if e.name == "AbortError" => Self::Aborted,
            other => Self::Network(other.to_string()),
        }
    }
}

/// Field-keyed validation errors in the `{"field": ["message", ...]}` shape.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    /// Parse a validation body. Anything that is not a JSON object yields no
    /// errors; plain string values count as a single message.
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) else {
            return Self::default();
        };
        let fields = map
            .into_iter()
            .filter_map(|(key, value)| {
                let messages = match value {
                    serde_json::Value::String(s) => vec![s],
                    serde_json::Value::Array(items) => items
                        .into_iter()
                        .filter_map(|item| item.as_str().map(str::to_owned))
                        .collect(),
                    _ => return None,
                };
                (!messages.is_empty()).then_some((key, messages))
            })
            .collect();
        Self { fields }
    }

    /// Messages for `field`, joined with a space.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<String> {
        self.fields.get(field).map(|messages| messages.join(" "))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
