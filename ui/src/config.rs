//! Home screen configuration.
//!
//! Values come from compile-time environment variables with sensible
//! defaults; platform crates provide the result through Dioxus context.

use api::{ApiError, HttpConsoleApi};
use tracing::error;

use crate::core::platform;

/// Used when neither `GATEWAY_API_BASE` nor a page origin is available.
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";
pub const DEFAULT_REPOSITORY_URL: &str = "https://github.com/QuantumNous/new-api";
pub const DEFAULT_ROTATE_INTERVAL_MS: u64 = 3_000;

/// Gateway routes advertised in the base URL carousel.
pub const API_ENDPOINTS: &[&str] = &[
    "/v1/chat/completions",
    "/v1/responses",
    "/v1/messages",
    "/v1beta/models",
    "/v1/embeddings",
    "/v1/rerank",
    "/v1/images/generations",
    "/v1/images/edits",
    "/v1/images/variations",
    "/v1/audio/speech",
    "/v1/audio/transcriptions",
    "/v1/audio/translations",
];

#[derive(Debug, Clone, PartialEq)]
pub struct HomeConfig {
    pub api_base: String,
    pub endpoints: Vec<String>,
    pub rotate_interval_ms: u64,
    pub console_route: String,
    pub checkout_route: String,
    pub repository_url: String,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            endpoints: API_ENDPOINTS.iter().map(|e| e.to_string()).collect(),
            rotate_interval_ms: DEFAULT_ROTATE_INTERVAL_MS,
            console_route: "/console".to_string(),
            checkout_route: "/console/topup".to_string(),
            repository_url: DEFAULT_REPOSITORY_URL.to_string(),
        }
    }
}

impl HomeConfig {
    /// Resolve the API base as `GATEWAY_API_BASE`, then the hosting page's
    /// origin, then [`DEFAULT_API_BASE`].
    pub fn from_env() -> Self {
        let api_base = option_env!("GATEWAY_API_BASE")
            .filter(|base| !base.trim().is_empty())
            .map(str::to_string)
            .or_else(platform::page_origin)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let repository_url = option_env!("GATEWAY_REPOSITORY_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(DEFAULT_REPOSITORY_URL)
            .to_string();

        Self {
            api_base,
            repository_url,
            ..Self::default()
        }
    }

    pub fn api_client(&self) -> Result<HttpConsoleApi, ApiError> {
        HttpConsoleApi::new(&self.api_base)
    }

    /// Client for the configured base; an unusable base is logged and
    /// replaced with [`DEFAULT_API_BASE`].
    pub fn api_client_or_default(&self) -> HttpConsoleApi {
        self.api_client().unwrap_or_else(|err| {
            error!("Falling back to {DEFAULT_API_BASE}: {err}");
            HttpConsoleApi::new(DEFAULT_API_BASE).expect("valid default API base")
        })
    }
}
