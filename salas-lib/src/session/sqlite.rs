//! SQLite session backend with in-memory cache.

use std::path::Path;

use async_sqlite::Client;
use async_sqlite::ClientBuilder;
use async_sqlite::JournalMode;
use async_trait::async_trait;
use dashmap::DashMap;

use super::SessionBackend;
use crate::error::SessionError;

/// SQLite-backed session storage with DashMap cache.
///
/// # Example
///
/// ```ignore
/// use salas_lib::session::SqliteBackend;
///
/// let backend = SqliteBackend::open("session.db").await?;
/// ```
pub struct SqliteBackend {
    client: Client,
    cache: DashMap<String, String>,
}

impl SqliteBackend {
    /// Opens (or creates) the session database at `path`.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let client = ClientBuilder::new()
            .path(path)
            .journal_mode(JournalMode::Wal)
            .open()
            .await?;

        Self::from_client(client).await
    }

    /// Opens an in-memory database. Data is lost when the backend is dropped.
    pub async fn open_in_memory() -> Result<Self, SessionError> {
        let client = ClientBuilder::new().path(":memory:").open().await?;
        Self::from_client(client).await
    }

    async fn from_client(client: Client) -> Result<Self, SessionError> {
        client
            .conn(|conn| {
                conn.execute(
                    "CREATE TABLE IF NOT EXISTS session (
                        key TEXT PRIMARY KEY,
                        value TEXT NOT NULL
                    )",
                    [],
                )
            })
            .await?;

        Ok(Self {
            client,
            cache: DashMap::new(),
        })
    }
}

#[async_trait]
impl SessionBackend for SqliteBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        if let Some(value) = self.cache.get(key) {
            return Ok(Some(value.clone()));
        }

        let key_owned = key.to_string();
        let result = self
            .client
            .conn(move |conn| {
                let mut stmt = conn.prepare("SELECT value FROM session WHERE key = ?")?;
                let mut rows = stmt.query([&key_owned])?;
                match rows.next()? {
                    Some(row) => Ok(Some(row.get::<_, String>(0)?)),
                    None => Ok(None),
                }
            })
            .await?;

        if let Some(ref value) = result {
            self.cache.insert(key.to_string(), value.clone());
        }

        Ok(result)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let key_owned = key.to_string();
        let value_owned = value.to_string();

        self.client
            .conn(move |conn| {
                conn.execute(
                    "INSERT INTO session (key, value) VALUES (?, ?)
                     ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                    [&key_owned, &value_owned],
                )
            })
            .await?;

        self.cache.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        self.client
            .conn(|conn| conn.execute("DELETE FROM session", []))
            .await?;

        self.cache.clear();
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, SessionError> {
        self.client
            .conn(|conn| {
                let mut stmt = conn.prepare("SELECT key FROM session ORDER BY key")?;
                let rows = stmt.query_map([], |row| row.get(0))?;
                rows.collect::<Result<Vec<_>, _>>()
            })
            .await
            .map_err(SessionError::from)
    }
}
