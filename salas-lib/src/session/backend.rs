//! Session backend trait.

use async_trait::async_trait;

use crate::error::SessionError;

/// Backend trait for persisted session state.
///
/// Stores plain string values by key, like browser local storage.
#[async_trait]
pub trait SessionBackend: Send + Sync {
    /// Get the value for a key.
    async fn get(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Set the value for a key.
    async fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Delete every key.
    async fn clear(&self) -> Result<(), SessionError>;

    /// All stored keys.
    async fn keys(&self) -> Result<Vec<String>, SessionError>;
}
