//! Session storage error types

/// Errors raised by session storage and the logout action.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The SQLite session store failed.
    #[error("database error: {0}")]
    Database(#[from] async_sqlite::Error),

    /// Navigating to the login location failed.
    #[error("failed to open {location}: {source}")]
    Navigation {
        /// Location that could not be opened.
        location: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
