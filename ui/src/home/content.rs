//! Operator-supplied home page content.
//!
//! The backend returns either an `https://` URL (embedded as a frame) or
//! markdown (rendered to sanitized HTML). An empty payload means the
//! operator has not customised the page and the marketing banner is shown.

use api::{ApiError, ConsoleApi};
use tracing::{debug, warn};

use crate::core::markup::markdown_to_html;
use crate::core::storage::{KeyValueStore, HOME_PAGE_CONTENT_KEY};
use crate::t;

/// Payloads with this prefix are embedded rather than rendered.
pub const FRAME_PREFIX: &str = "https://";

/// DOM id of the embedded content frame, used for the theme/locale handshake.
pub const HOME_FRAME_ID: &str = "home-content-frame";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HomeContent {
    /// Nothing cached and the fetch has not resolved.
    #[default]
    Pending,
    /// Loaded and empty: show the marketing banner.
    Banner,
    Frame(String),
    Html(String),
}

impl HomeContent {
    /// Classify an already-rendered string (a URL or sanitized HTML).
    pub fn from_rendered(rendered: &str) -> Self {
        if rendered.starts_with(FRAME_PREFIX) {
            Self::Frame(rendered.to_string())
        } else if rendered.is_empty() {
            Self::Banner
        } else {
            Self::Html(rendered.to_string())
        }
    }

    /// Content cached by the previous session, for an immediate first paint.
    pub fn from_cache(store: &impl KeyValueStore) -> Self {
        match store.get(HOME_PAGE_CONTENT_KEY) {
            Some(cached) if !cached.is_empty() => Self::from_rendered(&cached),
            _ => Self::Pending,
        }
    }

    /// Shown when the content request fails.
    pub fn load_failed() -> Self {
        Self::Html(t!("home-content-load-failed"))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// URLs pass through untouched; anything else is markdown.
pub fn render_payload(payload: &str) -> String {
    if payload.starts_with(FRAME_PREFIX) {
        payload.to_string()
    } else {
        markdown_to_html(payload)
    }
}

/// Fetch, render and cache the authoritative content. The cache holds the
/// rendered form so the next session can paint it without re-parsing.
pub async fn load_home_content<A, S>(api: &A, store: &S) -> Result<HomeContent, ApiError>
where
    A: ConsoleApi,
    S: KeyValueStore,
{
    let payload = api.home_page_content().await?;
    let rendered = render_payload(&payload);
    if let Err(err) = store.set(HOME_PAGE_CONTENT_KEY, &rendered) {
        warn!("Unable to cache home page content: {err}");
    }
    let content = HomeContent::from_rendered(&rendered);
    debug!(?content, "home page content loaded");
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;
    use crate::testing::{FakeApi, Reply};
    use futures::executor::block_on;

    fn serving(content: &str) -> FakeApi {
        FakeApi {
            content: Reply::Ok(content.to_string()),
            ..FakeApi::default()
        }
    }

    #[test]
    fn url_payload_becomes_frame() {
        let store = MemoryStore::new();
        let content = block_on(load_home_content(&serving("https://cdn.example/page"), &store))
            .unwrap();
        assert_eq!(content, HomeContent::Frame("https://cdn.example/page".into()));
        assert_eq!(
            store.get(HOME_PAGE_CONTENT_KEY).as_deref(),
            Some("https://cdn.example/page")
        );
    }

    #[test]
    fn markdown_payload_becomes_html_and_cache_holds_html() {
        let store = MemoryStore::new();
        let content = block_on(load_home_content(&serving("# Hello"), &store)).unwrap();

        let HomeContent::Html(html) = content else {
            panic!("expected html content");
        };
        assert!(html.contains("<h1>Hello</h1>"));

        let cached = store.get(HOME_PAGE_CONTENT_KEY).unwrap();
        assert_eq!(cached, html);
        assert!(!cached.contains("# Hello"));
        assert_eq!(HomeContent::from_cache(&store), HomeContent::Html(html));
    }

    #[test]
    fn plain_http_urls_are_treated_as_markdown() {
        let content = block_on(load_home_content(
            &serving("http://insecure.example"),
            &MemoryStore::new(),
        ))
        .unwrap();
        assert!(matches!(content, HomeContent::Html(_)));
    }

    #[test]
    fn empty_payload_shows_banner() {
        let store = MemoryStore::new().with_entry(HOME_PAGE_CONTENT_KEY, "<p>old</p>");
        let content = block_on(load_home_content(&serving(""), &store)).unwrap();
        assert_eq!(content, HomeContent::Banner);
        assert_eq!(store.get(HOME_PAGE_CONTENT_KEY).as_deref(), Some(""));
    }

    #[test]
    fn failures_propagate_and_keep_cache() {
        let store = MemoryStore::new().with_entry(HOME_PAGE_CONTENT_KEY, "<p>old</p>");
        let api = FakeApi {
            content: Reply::Rejected("content disabled"),
            ..FakeApi::default()
        };
        let err = block_on(load_home_content(&api, &store)).unwrap_err();
        assert_eq!(err.user_message(), "content disabled");
        assert_eq!(store.get(HOME_PAGE_CONTENT_KEY).as_deref(), Some("<p>old</p>"));
    }

    #[test]
    fn cache_drives_first_paint() {
        assert_eq!(HomeContent::from_cache(&MemoryStore::new()), HomeContent::Pending);
        assert_eq!(
            HomeContent::from_cache(&MemoryStore::new().with_entry(HOME_PAGE_CONTENT_KEY, "")),
            HomeContent::Pending
        );
        assert_eq!(
            HomeContent::from_cache(
                &MemoryStore::new().with_entry(HOME_PAGE_CONTENT_KEY, "https://cdn.example/page")
            ),
            HomeContent::Frame("https://cdn.example/page".into())
        );
    }

    #[test]
    fn load_failure_is_terminal_html() {
        crate::i18n::init();
        let failed = HomeContent::load_failed();
        assert!(matches!(failed, HomeContent::Html(ref text) if !text.is_empty()));
        assert!(!failed.is_pending());
    }
}
