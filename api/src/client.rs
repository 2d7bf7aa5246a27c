//! HTTP access to the console backend.

use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::envelope;
use crate::error::{ApiError, Result};
use crate::models::{plan_entries_from_rows, PlanEntry, SiteStatus};

pub const HOME_PAGE_CONTENT_PATH: &str = "/api/home_page_content";
pub const NOTICE_PATH: &str = "/api/notice";
pub const SUBSCRIPTION_PLANS_PATH: &str = "/api/subscription/plans";
pub const STATUS_PATH: &str = "/api/status";

/// Read-only backend surface used by the home screen.
///
/// Implementations report failures as [`ApiError`]; deciding how a failure
/// degrades is left to the caller.
#[allow(async_fn_in_trait)]
pub trait ConsoleApi {
    /// Home page payload: an `https://` URL or markdown source.
    async fn home_page_content(&self) -> Result<String>;
    /// Announcement text; blank means nothing to show.
    async fn notice(&self) -> Result<String>;
    async fn subscription_plans(&self) -> Result<Vec<PlanEntry>>;
    async fn status(&self) -> Result<SiteStatus>;
}

#[derive(Debug, Clone)]
pub struct HttpConsoleApi {
    client: reqwest::Client,
    base: Url,
}

impl HttpConsoleApi {
    pub fn new(base: &str) -> Result<Self> {
        let mut base = Url::parse(base).map_err(|err| ApiError::InvalidBase(err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidBase(base.to_string()));
        }
        // Joining is relative to the last path segment, so keep a trailing
        // slash to preserve any deployment prefix.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            client: reqwest::Client::new(),
            base,
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|err| ApiError::InvalidBase(err.to_string()))
    }

    async fn get_envelope<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        envelope::decode(&body)
    }
}

impl ConsoleApi for HttpConsoleApi {
    async fn home_page_content(&self) -> Result<String> {
        Ok(self
            .get_envelope::<String>(HOME_PAGE_CONTENT_PATH)
            .await?
            .unwrap_or_default())
    }

    async fn notice(&self) -> Result<String> {
        Ok(self.get_envelope::<String>(NOTICE_PATH).await?.unwrap_or_default())
    }

    async fn subscription_plans(&self) -> Result<Vec<PlanEntry>> {
        let rows = self
            .get_envelope::<Vec<serde_json::Value>>(SUBSCRIPTION_PLANS_PATH)
            .await?
            .unwrap_or_default();
        Ok(plan_entries_from_rows(rows))
    }

    async fn status(&self) -> Result<SiteStatus> {
        Ok(self
            .get_envelope::<SiteStatus>(STATUS_PATH)
            .await?
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_onto_origin() {
        let api = HttpConsoleApi::new("https://console.example.com").unwrap();
        assert_eq!(
            api.endpoint(SUBSCRIPTION_PLANS_PATH).unwrap().as_str(),
            "https://console.example.com/api/subscription/plans"
        );
    }

    #[test]
    fn deployment_prefix_is_preserved() {
        let api = HttpConsoleApi::new("https://example.com/gateway").unwrap();
        assert_eq!(api.base().as_str(), "https://example.com/gateway/");
        assert_eq!(
            api.endpoint(NOTICE_PATH).unwrap().as_str(),
            "https://example.com/gateway/api/notice"
        );
    }

    #[test]
    fn relative_base_is_rejected() {
        let err = HttpConsoleApi::new("/api").unwrap_err();
        assert!(matches!(err, ApiError::InvalidBase(_)));

        let err = HttpConsoleApi::new("mailto:ops@example.com").unwrap_err();
        assert!(matches!(err, ApiError::InvalidBase(_)));
    }
}
