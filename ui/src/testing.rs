//! In-memory [`ConsoleApi`] used by unit tests.

use std::cell::Cell;

use api::{ApiError, ConsoleApi, PlanEntry, SiteStatus};

#[derive(Debug, Clone)]
pub(crate) enum Reply<T> {
    Ok(T),
    Rejected(&'static str),
    Unavailable,
}

impl<T: Clone> Reply<T> {
    fn resolve(&self) -> Result<T, ApiError> {
        match self {
            Self::Ok(value) => Ok(value.clone()),
            Self::Rejected(message) => Err(ApiError::Rejected((*message).to_string())),
            Self::Unavailable => Err(ApiError::Status(503)),
        }
    }
}

#[derive(Debug)]
pub(crate) struct FakeApi {
    pub content: Reply<String>,
    pub notice: Reply<String>,
    pub plans: Reply<Vec<PlanEntry>>,
    pub status: Reply<SiteStatus>,
    pub notice_calls: Cell<u32>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            content: Reply::Ok(String::new()),
            notice: Reply::Ok(String::new()),
            plans: Reply::Ok(Vec::new()),
            status: Reply::Ok(SiteStatus::default()),
            notice_calls: Cell::new(0),
        }
    }
}

impl ConsoleApi for FakeApi {
    async fn home_page_content(&self) -> Result<String, ApiError> {
        self.content.resolve()
    }

    async fn notice(&self) -> Result<String, ApiError> {
        self.notice_calls.set(self.notice_calls.get() + 1);
        self.notice.resolve()
    }

    async fn subscription_plans(&self) -> Result<Vec<PlanEntry>, ApiError> {
        self.plans.resolve()
    }

    async fn status(&self) -> Result<SiteStatus, ApiError> {
        self.status.resolve()
    }
}
