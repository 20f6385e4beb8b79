//! Renderer configuration

use std::time::Duration;

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Location the logout action navigates to.
pub const DEFAULT_LOGIN_URL: &str = "login.html";

/// Configuration injected into the list client at construction.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use salas_lib::RendererConfig;
///
/// let config = RendererConfig::new("http://salas.example.edu/api")
///     .with_timeout(Duration::from_secs(10));
///
/// assert_eq!(config.base_url, "http://salas.example.edu/api");
/// ```
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Base URL the collection paths are appended to.
    ///
    /// Default: `http://localhost:5000/api`
    pub base_url: String,

    /// Per-request timeout.
    ///
    /// Default: none, a hung connection keeps the loading placeholder.
    pub timeout: Option<Duration>,

    /// Where logout sends the user.
    ///
    /// Default: `login.html`
    pub login_url: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            login_url: DEFAULT_LOGIN_URL.to_string(),
        }
    }
}

impl RendererConfig {
    /// Creates a config for the given base URL with default settings.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the logout destination.
    pub fn with_login_url(mut self, login_url: impl Into<String>) -> Self {
        self.login_url = login_url.into();
        self
    }
}
