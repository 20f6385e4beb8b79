//! Envelope protocol errors

/// The backend answered with a body that is not a usable `{success, data}` envelope.
///
/// Distinct from a transport failure and from a successful empty result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Malformed envelope: {reason}")]
pub struct ProtocolError {
    /// Human-readable description of what was wrong.
    pub reason: String,
}

impl ProtocolError {
    /// Creates a new protocol error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// The envelope reported `success: false`.
    pub fn unsuccessful(backend_error: Option<&str>) -> Self {
        match backend_error {
            Some(message) => Self::new(format!("backend reported failure: {}", message)),
            None => Self::new("backend reported failure"),
        }
    }

    /// The envelope has no `data` field (or it is `null`).
    pub fn missing_data() -> Self {
        Self::new("missing `data` field")
    }

    /// The `data` field is present but not an array.
    pub fn not_a_collection(found: &serde_json::Value) -> Self {
        Self::new(format!("`data` is not an array (found {})", json_type_name(found)))
    }

    /// The body could not be decoded as a JSON envelope.
    pub fn invalid_body(err: &serde_json::Error) -> Self {
        Self::new(format!("invalid JSON body: {}", err))
    }

    /// An element of `data` does not match the expected record shape.
    pub fn invalid_record(index: usize, err: &serde_json::Error) -> Self {
        Self::new(format!("record {} is malformed: {}", index, err))
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
