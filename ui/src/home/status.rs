//! Public site status consumed by the banner.

use api::{ConsoleApi, SiteStatus};
use tracing::warn;

/// Status with defaults on any failure.
pub async fn load_status<A: ConsoleApi>(api: &A) -> SiteStatus {
    api.status().await.unwrap_or_else(|err| {
        warn!("Site status unavailable: {err}");
        SiteStatus::default()
    })
}

/// Base URL advertised to users: the configured server address, else
/// `fallback` (page origin or API base).
pub fn server_address(status: &SiteStatus, fallback: &str) -> String {
    let configured = status.server_address.trim().trim_end_matches('/');
    if configured.is_empty() {
        fallback.trim_end_matches('/').to_string()
    } else {
        configured.to_string()
    }
}

/// Version badge text, only on demo sites that report a version.
pub fn demo_version(status: &SiteStatus) -> Option<&str> {
    let version = status.version.trim();
    (status.demo_site_enabled && !version.is_empty()).then_some(version)
}
