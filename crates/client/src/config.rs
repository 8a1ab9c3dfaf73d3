/// Client configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. In production,
/// override via environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the admin backend (no trailing slash).
    pub base_url: String,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                 |
    /// |--------------------------|-------------------------|
    /// | `LAUNCHDECK_API_BASE_URL`| `http://localhost:8080` |
    pub fn from_env() -> Self {
        let base_url = std::env::var("LAUNCHDECK_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".into());
        Self::new(base_url)
    }

    /// Build a configuration for an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
