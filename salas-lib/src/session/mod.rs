//! Persisted session state and logout.
//!
//! The front end keeps one meaningful entry, the email of the signed-in user.
//! Logging out wipes every key, not only that one.

mod backend;
mod memory;
mod sqlite;

pub use backend::SessionBackend;
pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

use std::sync::Arc;

use log::info;

use crate::error::SessionError;

/// Key holding the signed-in user's email.
pub const CURRENT_USER_EMAIL: &str = "current_user_email";

/// Question asked before logging out.
pub const LOGOUT_PROMPT: &str = "¿Está seguro que desea cerrar sesión?";

/// Session store.
///
/// Wraps a `SessionBackend` with the accessors the pages use.
#[derive(Clone)]
pub struct Session {
    backend: Arc<dyn SessionBackend>,
}

impl Session {
    /// Create a session over the given backend.
    pub fn new(backend: impl SessionBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// A session that lives only as long as the process.
    pub fn in_memory() -> Self {
        Self::new(MemoryBackend::new())
    }

    /// Get a stored value.
    pub async fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        self.backend.get(key).await
    }

    /// Store a value.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        self.backend.set(key, value).await
    }

    /// The signed-in user's email, if any. Read-only for display.
    pub async fn current_user_email(&self) -> Result<Option<String>, SessionError> {
        self.get(CURRENT_USER_EMAIL).await
    }

    /// Records the signed-in user's email.
    pub async fn set_current_user_email(&self, email: &str) -> Result<(), SessionError> {
        self.set(CURRENT_USER_EMAIL, email).await
    }

    /// Removes every stored key.
    pub async fn clear(&self) -> Result<(), SessionError> {
        self.backend.clear().await
    }

    /// All stored keys.
    pub async fn keys(&self) -> Result<Vec<String>, SessionError> {
        self.backend.keys().await
    }
}

/// Blocking yes/no prompt shown before logging out.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Performs the full-page navigation after logout.
pub trait Navigator {
    fn navigate(&self, location: &str) -> Result<(), SessionError>;
}

/// Opens the location with the system's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, location: &str) -> Result<(), SessionError> {
        open::that(location).map_err(|source| SessionError::Navigation {
            location: location.to_string(),
            source,
        })
    }
}

/// Result of a logout attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutOutcome {
    /// The session was cleared and the login location opened.
    LoggedOut,
    /// The user declined; nothing changed.
    Cancelled,
}

/// Asks for confirmation, clears all session state, then navigates to
/// `login_url`.
pub async fn logout(
    session: &Session,
    confirm: &dyn Confirm,
    navigator: &dyn Navigator,
    login_url: &str,
) -> Result<LogoutOutcome, SessionError> {
    if !confirm.confirm(LOGOUT_PROMPT) {
        info!("logout cancelled by user");
        return Ok(LogoutOutcome::Cancelled);
    }

    session.clear().await?;
    info!("session cleared, redirecting to {}", login_url);
    navigator.navigate(login_url)?;

    Ok(LogoutOutcome::LoggedOut)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct RecordingNavigator {
        visited: Mutex<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, location: &str) -> Result<(), SessionError> {
            self.visited.lock().unwrap().push(location.to_string());
            Ok(())
        }
    }

    async fn signed_in(session: &Session) {
        session.set_current_user_email("ana@ucu.edu.uy").await.unwrap();
        session.set("theme", "dark").await.unwrap();
    }

    #[tokio::test]
    async fn test_current_user_email() {
        let session = Session::in_memory();
        assert_eq!(session.current_user_email().await.unwrap(), None);

        signed_in(&session).await;
        assert_eq!(
            session.current_user_email().await.unwrap().as_deref(),
            Some("ana@ucu.edu.uy")
        );
    }

    #[tokio::test]
    async fn test_logout_clears_everything_and_navigates() {
        let session = Session::in_memory();
        signed_in(&session).await;
        let navigator = RecordingNavigator::default();

        let outcome = logout(&session, &|_: &str| true, &navigator, "login.html")
            .await
            .unwrap();

        assert_eq!(outcome, LogoutOutcome::LoggedOut);
        assert!(session.keys().await.unwrap().is_empty());
        assert_eq!(*navigator.visited.lock().unwrap(), vec!["login.html"]);
    }

    #[tokio::test]
    async fn test_declined_logout_changes_nothing() {
        let session = Session::in_memory();
        signed_in(&session).await;
        let navigator = RecordingNavigator::default();
        let asked = Mutex::new(None);

        let outcome = logout(
            &session,
            &|prompt: &str| {
                *asked.lock().unwrap() = Some(prompt.to_string());
                false
            },
            &navigator,
            "login.html",
        )
        .await
        .unwrap();

        assert_eq!(outcome, LogoutOutcome::Cancelled);
        assert_eq!(asked.lock().unwrap().as_deref(), Some(LOGOUT_PROMPT));
        assert_eq!(session.keys().await.unwrap().len(), 2);
        assert!(navigator.visited.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_sqlite_backend_round_trip() {
        let session = Session::new(SqliteBackend::open_in_memory().await.unwrap());
        signed_in(&session).await;
        session.set("theme", "light").await.unwrap();

        assert_eq!(session.get("theme").await.unwrap().as_deref(), Some("light"));
        assert_eq!(
            session.keys().await.unwrap(),
            vec![CURRENT_USER_EMAIL.to_string(), "theme".to_string()]
        );

        session.clear().await.unwrap();
        assert_eq!(session.current_user_email().await.unwrap(), None);
        assert!(session.keys().await.unwrap().is_empty());
    }
}
