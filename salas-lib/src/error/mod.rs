//! Error types

mod protocol;
mod session;
mod transport;

pub use protocol::*;
pub use session::*;
pub use transport::*;

/// Top-level error type for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backend could not be reached or answered with a non-2xx status.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The backend answered, but the envelope was malformed or unsuccessful.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Persisted session state could not be read or written.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The configured base URL is not a valid absolute URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

impl Error {
    /// Returns the HTTP status code if this is a transport status failure.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport(e) => e.status_code(),
            _ => None,
        }
    }
}
