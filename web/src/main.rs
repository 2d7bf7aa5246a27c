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
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
}

// The shared theme lives in `ui`; inline it so both platforms style identically.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}

// The console is served by the gateway itself, outside this router.
fn nav_console(label: &str) -> Element {
    let href = HomeConfig::from_env().console_route;
    rsx!(a {
        class: "navbar__link",
        href: "{href}",
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        home: nav_home,
        console: nav_console,
    });

    use_context_provider(HomeConfig::from_env);
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);
    let theme = use_signal(|| ThemeMode::load(&platform_store()));
    use_context_provider(|| theme);
    // Outlives the language-keyed remount below.
    use_context_provider(NoticeSession::default);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        div {
            class: "app",
            "data-theme": "{theme()}",
            // Keyed on the language so every routed view re-renders its strings.
            div {
                key: "{lang_code()}",
                Router::<Route> {}
            }
        }
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
