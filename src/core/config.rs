//! Application configuration from environment variables.
//!
//! The server reads `BACKEND_URL` from the process environment (call
//! `dotenvy::dotenv()` first to pick up a `.env` file) and renders the result
//! into the page head as `<meta name="backend-url">`. The hydrated app has no
//! process environment and reads that tag back, so both sides share the
//! server's runtime value.

use std::sync::OnceLock;

/// Backend used when `BACKEND_URL` is unset or empty
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// `name` of the `<meta>` tag carrying the backend URL into the browser
pub const BACKEND_URL_META: &str = "backend-url";

/// Path of the signup endpoint, relative to the backend base URL
pub const WAITLIST_PATH: &str = "/api/waitlist";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root address of the Waitlist Service, without a trailing slash
    /// Example: https://api.recollect.app
    pub backend_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::with_backend_url(read_backend_url())
    }

    /// Build a config from an optional backend URL, applying the default.
    ///
    /// Empty values count as unset and trailing slashes are trimmed so that
    /// joining `WAITLIST_PATH` never yields `//`.
    pub fn with_backend_url(backend_url: Option<String>) -> Self {
        let backend_url = backend_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        Self { backend_url }
    }

    /// Process-wide config, read from the environment on first access
    pub fn global() -> &'static Config {
        static CONFIG: OnceLock<Config> = OnceLock::new();
        CONFIG.get_or_init(Config::from_env)
    }

    /// Full URL of the waitlist signup endpoint
    pub fn waitlist_endpoint(&self) -> String {
        format!("{}{}", self.backend_url, WAITLIST_PATH)
    }

    /// Check if the backend points at the built-in default
    pub fn uses_default_backend(&self) -> bool {
        self.backend_url == DEFAULT_BACKEND_URL
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(feature = "ssr")]
fn read_backend_url() -> Option<String> {
    std::env::var("BACKEND_URL").ok()
}

#[cfg(all(feature = "hydrate", not(feature = "ssr")))]
fn read_backend_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", BACKEND_URL_META);
    let meta = document.query_selector(&selector).ok()??;
    meta.get_attribute("content")
}

#[cfg(not(any(feature = "ssr", feature = "hydrate")))]
fn read_backend_url() -> Option<String> {
    None
}
