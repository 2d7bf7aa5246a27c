use crate::core::storage::platform_store;
use crate::core::theme::ThemeMode;
use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use tracing::warn;

// Navbar stylesheet (inlined as well for release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Platforms register a `NavBuilder` providing fully constructed links so
/// `ui` does not need to know each platform's `Route` enum.
///
/// Each function receives the localized label and returns a `Link` (or an
/// anchor styled as a nav link) that already contains it:
///
/// ```ignore
/// use ui::components::app_navbar::{NavBuilder, register_nav};
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///     console: |label| rsx!( a { class: "navbar__link", href: "/console", "{label}" } ),
/// });
/// ```
///
/// Without a builder the navbar renders whatever `children` it is given.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub console: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code / theme signals if the platform provided them.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let theme_ctx: Option<Signal<ThemeMode>> = try_use_context::<Signal<ThemeMode>>();
    // Reactive dependency on the global language code (if provided)
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => warn!("Unable to switch language to {val}: {err}"),
        }
    };

    let theme = theme_ctx.map(|t| t()).unwrap_or_default();
    let theme_label = if theme.is_dark() {
        t!("nav-theme-light")
    } else {
        t!("nav-theme-dark")
    };
    let toggle_theme = move |_: MouseEvent| {
        if let Some(mut signal) = theme_ctx {
            let next = signal().toggled();
            signal.set(next);
            if let Err(err) = next.save(&platform_store()) {
                warn!("Unable to remember theme: {err}");
            }
        }
    };

    let internal_nav: Option<Element> = NAV_BUILDER.get().map(|b| {
        let home = (b.home)(&t!("nav-home"));
        let console = (b.console)(&t!("nav-console"));

        rsx! {
            nav { class: "navbar__links",
                {home}
                {console}
            }
        }
    });

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker keeps the navbar subscribed to the global language signal.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Gateway Console" }
                    }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }

                div { class: "navbar__tools",
                    if theme_ctx.is_some() {
                        button {
                            r#type: "button",
                            class: "navbar__theme",
                            aria_label: "{theme_label}",
                            title: "{theme_label}",
                            onclick: toggle_theme,
                            if theme.is_dark() { "☀" } else { "☾" }
                        }
                    }

                    if show_switcher {
                        div { class: "navbar__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang()}",
                                oninput: on_change,
                                { langs().iter().map(|code| {
                                    let c = code.clone();
                                    rsx!{
                                        option { key: "{c}", value: "{c}", "{c}" }
                                    }
                                })}
                            }
                        }
                    }
                }
            }
        }
    }
}
