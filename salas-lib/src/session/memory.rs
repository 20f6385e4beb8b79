//! In-memory session backend.

use async_trait::async_trait;
use dashmap::DashMap;

use super::SessionBackend;
use crate::error::SessionError;

/// Session state held in a concurrent map; lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    store: DashMap<String, String>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        Ok(self.store.get(key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.store.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        self.store.clear();
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, SessionError> {
        Ok(self.store.iter().map(|e| e.key().clone()).collect())
    }
}
