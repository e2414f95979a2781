use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_SESSION_FILE: &str = ".medibook/session.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u64,
    pub session_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            api_base_url: env::var("MEDIBOOK_API_URL")
                .unwrap_or_else(|_| {
                    warn!("MEDIBOOK_API_URL not set, using default");
                    DEFAULT_API_URL.to_string()
                }),
            request_timeout_ms: match env::var("MEDIBOOK_TIMEOUT_MS") {
                Ok(raw) => raw.parse().unwrap_or_else(|_| {
                    warn!("MEDIBOOK_TIMEOUT_MS is not a number ({}), using default", raw);
                    DEFAULT_TIMEOUT_MS
                }),
                Err(_) => DEFAULT_TIMEOUT_MS,
            },
            session_file: env::var("MEDIBOOK_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE)),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - API base URL is empty");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.api_base_url.trim().is_empty()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
