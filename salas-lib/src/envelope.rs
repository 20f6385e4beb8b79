//! The `{success, data}` wrapper every list endpoint returns

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ProtocolError;

/// A decoded response envelope.
///
/// `data` is kept as raw JSON until [`Envelope::into_records`] so that a
/// missing payload, a non-array payload and a malformed element can each be
/// reported precisely.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    /// Whether the backend considers the request successful.
    #[serde(default)]
    pub success: bool,
    /// The payload collection.
    #[serde(default)]
    pub data: Option<Value>,
    /// Error message the backend attaches when `success` is false.
    #[serde(default)]
    pub error: Option<String>,
    /// Row count the backend reports alongside `data`.
    #[serde(default)]
    pub count: Option<u64>,
}

impl Envelope {
    /// Decodes an envelope from a response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, ProtocolError> {
        serde_json::from_slice(body).map_err(|e| ProtocolError::invalid_body(&e))
    }

    /// Validates the envelope and decodes every element of `data` as `T`.
    ///
    /// An empty vector means the backend succeeded with zero results, which
    /// is not an error.
    pub fn into_records<T: DeserializeOwned>(self) -> Result<Vec<T>, ProtocolError> {
        if !self.success {
            return Err(ProtocolError::unsuccessful(self.error.as_deref()));
        }

        let items = match self.data {
            None | Some(Value::Null) => return Err(ProtocolError::missing_data()),
            Some(Value::Array(items)) => items,
            Some(other) => return Err(ProtocolError::not_a_collection(&other)),
        };

        if let Some(count) = self.count.filter(|&c| c != items.len() as u64) {
            log::warn!(
                "envelope count {} does not match {} data elements",
                count,
                items.len()
            );
        }

        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                serde_json::from_value(item).map_err(|e| ProtocolError::invalid_record(i, &e))
            })
            .collect()
    }
}
