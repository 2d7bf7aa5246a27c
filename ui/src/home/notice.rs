//! Once-per-day announcement modal.

use std::cell::Cell;
use std::rc::Rc;

use api::ConsoleApi;
use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::core::markup::markdown_to_html;
use crate::core::storage::{KeyValueStore, NOTICE_CLOSE_DATE_KEY};
use crate::t;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NoticeGate {
    /// Not evaluated yet for this mount.
    #[default]
    Unchecked,
    /// Announcement fetched and showing.
    Eligible(String),
    /// Nothing to show until the next mount (or the next day, if dismissed).
    Suppressed,
}

impl NoticeGate {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Eligible(_))
    }

    pub fn visible_text(&self) -> Option<String> {
        match self {
            Self::Eligible(text) => Some(text.clone()),
            _ => None,
        }
    }
}

/// Remembers a plain "Close" for the rest of the app session. Platforms
/// provide it above the language-keyed subtree, so a locale switch that
/// remounts the home view does not bring a closed notice back.
#[derive(Debug, Clone, Default)]
pub struct NoticeSession {
    closed: Rc<Cell<bool>>,
}

impl NoticeSession {
    pub fn close(&self) -> NoticeGate {
        self.closed.set(true);
        NoticeGate::Suppressed
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }
}

impl PartialEq for NoticeSession {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.closed, &other.closed)
    }
}

/// True unless the notice was already dismissed on `today`.
pub fn needs_check(store: &impl KeyValueStore, today: &str) -> bool {
    store.get(NOTICE_CLOSE_DATE_KEY).as_deref() != Some(today)
}

/// Evaluate the gate for one mount. Fetch failures are logged and leave the
/// modal hidden; they never reach the user.
pub async fn check_notice<A, S>(api: &A, store: &S, today: &str) -> NoticeGate
where
    A: ConsoleApi,
    S: KeyValueStore,
{
    if !needs_check(store, today) {
        debug!(today, "notice already dismissed today");
        return NoticeGate::Suppressed;
    }

    match api.notice().await {
        Ok(text) if !text.trim().is_empty() => NoticeGate::Eligible(text),
        Ok(_) => NoticeGate::Suppressed,
        Err(err) => {
            warn!("Failed to fetch notice: {err}");
            NoticeGate::Suppressed
        }
    }
}

/// [`check_notice`], skipped entirely once the notice was closed this session.
pub async fn check_notice_for_session<A, S>(
    api: &A,
    store: &S,
    today: &str,
    session: &NoticeSession,
) -> NoticeGate
where
    A: ConsoleApi,
    S: KeyValueStore,
{
    if session.is_closed() {
        debug!("notice closed earlier this session");
        return NoticeGate::Suppressed;
    }
    check_notice(api, store, today).await
}

/// "Close for today": remember the day so later mounts skip the fetch.
pub fn dismiss_for_today(store: &impl KeyValueStore, today: &str) -> NoticeGate {
    if let Err(err) = store.set(NOTICE_CLOSE_DATE_KEY, today) {
        warn!("Unable to remember notice dismissal: {err}");
    }
    NoticeGate::Suppressed
}

#[component]
pub fn NoticeModal(
    text: String,
    on_close: EventHandler<()>,
    on_close_today: EventHandler<()>,
) -> Element {
    let html = markdown_to_html(&text);

    rsx! {
        div { class: "notice-backdrop",
            div {
                class: "notice-modal",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "notice-modal-title",
                div { class: "notice-modal__header",
                    h3 { id: "notice-modal-title", class: "notice-modal__title", {t!("notice-title")} }
                }
                div { class: "notice-modal__body", dangerous_inner_html: "{html}" }
                div { class: "notice-modal__actions",
                    button {
                        r#type: "button",
                        class: "button button--ghost",
                        onclick: move |_| on_close_today.call(()),
                        {t!("notice-close-today")}
                    }
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: move |_| on_close.call(()),
                        {t!("notice-close")}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;
    use crate::testing::{FakeApi, Reply};
    use futures::executor::block_on;

    const TODAY: &str = "2026-10-18";
    const YESTERDAY: &str = "2026-10-17";

    fn announcing(text: &'static str) -> FakeApi {
        FakeApi {
            notice: Reply::Ok(text.to_string()),
            ..FakeApi::default()
        }
    }

    #[test]
    fn dismissed_today_skips_fetch() {
        let api = announcing("Scheduled maintenance");
        let store = MemoryStore::new().with_entry(NOTICE_CLOSE_DATE_KEY, TODAY);

        let gate = block_on(check_notice(&api, &store, TODAY));
        assert_eq!(gate, NoticeGate::Suppressed);
        assert_eq!(api.notice_calls.get(), 0);
    }

    #[test]
    fn dismissed_yesterday_shows_announcement() {
        let api = announcing("Scheduled maintenance");
        let store = MemoryStore::new().with_entry(NOTICE_CLOSE_DATE_KEY, YESTERDAY);

        let gate = block_on(check_notice(&api, &store, TODAY));
        assert!(gate.is_visible());
        assert_eq!(gate.visible_text().as_deref(), Some("Scheduled maintenance"));
        assert_eq!(api.notice_calls.get(), 1);
    }

    #[test]
    fn never_dismissed_shows_announcement() {
        let api = announcing("New models available");
        let gate = block_on(check_notice(&api, &MemoryStore::new(), TODAY));
        assert!(gate.is_visible());
    }

    #[test]
    fn blank_announcement_stays_hidden() {
        let api = announcing("   \n ");
        let gate = block_on(check_notice(&api, &MemoryStore::new(), TODAY));
        assert_eq!(gate, NoticeGate::Suppressed);
    }

    #[test]
    fn fetch_failure_stays_hidden() {
        for notice in [Reply::Unavailable, Reply::Rejected("disabled")] {
            let api = FakeApi {
                notice,
                ..FakeApi::default()
            };
            let gate = block_on(check_notice(&api, &MemoryStore::new(), TODAY));
            assert_eq!(gate, NoticeGate::Suppressed);
        }
    }

    #[test]
    fn dismissal_persists_until_the_day_changes() {
        let api = announcing("Scheduled maintenance");
        let store = MemoryStore::new();

        assert!(block_on(check_notice(&api, &store, TODAY)).is_visible());
        assert_eq!(dismiss_for_today(&store, TODAY), NoticeGate::Suppressed);
        assert_eq!(store.get(NOTICE_CLOSE_DATE_KEY).as_deref(), Some(TODAY));

        // Same-day remount.
        assert_eq!(block_on(check_notice(&api, &store, TODAY)), NoticeGate::Suppressed);
        assert_eq!(api.notice_calls.get(), 1);

        // Next day.
        assert!(block_on(check_notice(&api, &store, "2026-10-19")).is_visible());
    }

    #[test]
    fn closed_notice_stays_closed_across_remounts() {
        let api = announcing("Scheduled maintenance");
        let store = MemoryStore::new();
        let session = NoticeSession::default();
        // A remounted view sees the same session through context.
        let remounted = session.clone();

        let first = block_on(check_notice_for_session(&api, &store, TODAY, &session));
        assert!(first.is_visible());
        assert_eq!(session.close(), NoticeGate::Suppressed);

        let again = block_on(check_notice_for_session(&api, &store, TODAY, &remounted));
        assert_eq!(again, NoticeGate::Suppressed);
        assert_eq!(api.notice_calls.get(), 1);
        // Plain close is not persisted.
        assert_eq!(store.get(NOTICE_CLOSE_DATE_KEY), None);

        let fresh = NoticeSession::default();
        assert!(block_on(check_notice_for_session(&api, &store, TODAY, &fresh)).is_visible());
    }
}
