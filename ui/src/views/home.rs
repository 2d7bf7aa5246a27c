use dioxus::prelude::*;
use tracing::{error, warn};

use crate::components::toast::{use_toast_center, ToastHost};
use crate::config::HomeConfig;
use crate::core::platform;
use crate::core::storage::platform_store;
use crate::core::theme::ThemeMode;
use crate::core::timing::today_key;
use crate::home::{
    check_notice_for_session, dismiss_for_today, load_home_content, load_status, Banner,
    HomeContent, NoticeGate, NoticeModal, NoticeSession, HOME_FRAME_ID,
};
use crate::plans::fetch_plans;
use crate::t;

#[cfg(debug_assertions)]
fn log_home_render(lang: &str, content: &HomeContent) {
    // Lightweight render trace for diagnosing content/i18n refresh issues.
    tracing::trace!(lang, ?content, "Home render");
}

#[component]
pub fn Home() -> Element {
    let config = use_hook(|| try_consume_context::<HomeConfig>().unwrap_or_else(HomeConfig::from_env));
    let api = use_hook(|| config.api_client_or_default());
    let store = use_hook(platform_store);
    let toasts = use_toast_center();

    // Global theme and language signals are optional; platforms provide them.
    let theme_ctx: Option<Signal<ThemeMode>> = try_use_context::<Signal<ThemeMode>>();
    let lang_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let theme_mode = theme_ctx.map(|theme| theme()).unwrap_or_default();
    let lang_code = lang_ctx
        .map(|lang| lang())
        .unwrap_or_else(crate::i18n::current_language);

    // Cached content paints immediately; the fetch below replaces it.
    let mut content = use_signal({
        let store = store.clone();
        move || HomeContent::from_cache(&store)
    });
    use_future({
        let api = api.clone();
        let store = store.clone();
        move || {
            let api = api.clone();
            let store = store.clone();
            async move {
                match load_home_content(&api, &store).await {
                    Ok(loaded) => {
                        if *content.peek() != loaded {
                            content.set(loaded);
                        }
                    }
                    Err(err) => {
                        error!("Failed to load home page content: {err}");
                        toasts.error(err.user_message());
                        content.set(HomeContent::load_failed());
                    }
                }
            }
        }
    });

    let session = use_hook(|| try_consume_context::<NoticeSession>().unwrap_or_default());
    let mut notice = use_signal(|| NoticeGate::Unchecked);
    use_future({
        let api = api.clone();
        let store = store.clone();
        let session = session.clone();
        move || {
            let api = api.clone();
            let store = store.clone();
            let session = session.clone();
            async move {
                let gate = check_notice_for_session(&api, &store, &today_key(), &session).await;
                notice.set(gate);
            }
        }
    });

    let plans = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { fetch_plans(&api).await }
        }
    });
    let status = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { load_status(&api).await }
        }
    });

    let current = content();

    #[cfg(debug_assertions)]
    {
        log_home_render(&lang_code, &current);
    }

    let body = match current {
        HomeContent::Pending => rsx! {
            div { class: "home-custom" }
        },
        HomeContent::Banner => rsx! {
            Banner {
                config: config.clone(),
                status: status.cloned(),
                plans: plans.cloned(),
                wide_title: lang_code.starts_with("zh"),
            }
        },
        HomeContent::Frame(url) => {
            let theme = theme_mode.as_str();
            let lang = lang_code.clone();
            rsx! {
                iframe {
                    id: HOME_FRAME_ID,
                    class: "home-frame",
                    src: "{url}",
                    title: t!("home-content-frame-title"),
                    onload: move |_| {
                        if let Err(err) = platform::post_frame_handshake(HOME_FRAME_ID, theme, &lang) {
                            warn!("Home frame handshake failed: {err}");
                        }
                    },
                }
            }
        }
        HomeContent::Html(html) => rsx! {
            div { class: "home-custom", dangerous_inner_html: "{html}" }
        },
    };

    let notice_text = notice().visible_text();
    let close_notice = move |_: ()| notice.set(session.close());
    let close_notice_today = {
        let store = store.clone();
        move |_: ()| notice.set(dismiss_for_today(&store, &today_key()))
    };

    let page_class = if theme_mode.is_dark() {
        "page page-home page-home--dark"
    } else {
        "page page-home"
    };

    rsx! {
        section { class: "{page_class}",
            ToastHost {}
            if let Some(text) = notice_text {
                NoticeModal {
                    text: text,
                    on_close: close_notice,
                    on_close_today: close_notice_today,
                }
            }
            {body}
        }
    }
}
