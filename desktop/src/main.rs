#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::storage::platform_store;
use ui::core::theme::ThemeMode;
use ui::home::NoticeSession;
use ui::views::Home;
use ui::HomeConfig;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Gateway Console – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}

// The console lives on the gateway; open it from the configured origin.
fn nav_console(label: &str) -> Element {
    let config = HomeConfig::from_env();
    let href = format!(
        "{}{}",
        config.api_base.trim_end_matches('/'),
        config.console_route
    );
    rsx!(a { class: "navbar__link", href: "{href}", "{label}" })
}

#[component]
fn App() -> Element {
    // Initialize i18n once
    ui::i18n::init();

    use_context_provider(HomeConfig::from_env);

    // Global reactive language code; AppNavbar updates it on language selection.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    // Theme preference survives restarts through the preferences file.
    let theme = use_signal(|| ThemeMode::load(&platform_store()));
    use_context_provider(|| theme);
    // Outlives the language-keyed remount below.
    use_context_provider(NoticeSession::default);

    register_nav(NavBuilder {
        home: nav_home,
        console: nav_console,
    });

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        div {
            class: "app",
            "data-theme": "{theme()}",
            // Keyed wrapper div to force full remount on language change.
            div {
                key: "{lang_code()}",
                Router::<Route> { }
            }
        }
    }
}

/// A desktop-specific Router around the shared `AppNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
