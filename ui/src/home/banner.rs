//! Marketing banner shown when the operator has not customised the page.

use api::{PlanEntry, SiteStatus};
use dioxus::prelude::*;

use crate::components::toast::ToastCenter;
use crate::config::HomeConfig;
use crate::core::format::QuotaDisplay;
use crate::core::platform;
use crate::plans::PlanSection;
use crate::t;

use super::carousel::EndpointCarousel;
use super::status::{demo_version, server_address};

#[component]
pub fn Banner(
    config: HomeConfig,
    // `None` until the respective request resolves.
    status: Option<SiteStatus>,
    plans: Option<Vec<PlanEntry>>,
    wide_title: bool,
) -> Element {
    let toasts = use_context::<ToastCenter>();

    let status = status.unwrap_or_default();
    let fallback = platform::page_origin().unwrap_or_else(|| config.api_base.clone());
    let address = server_address(&status, &fallback);
    let version = demo_version(&status).map(str::to_string);
    let quota = QuotaDisplay::from_status(&status);

    let copy_address = {
        let address = address.clone();
        move |_: MouseEvent| {
            let address = address.clone();
            spawn(async move {
                match platform::copy_to_clipboard(address).await {
                    Ok(()) => toasts.success(t!("home-copied")),
                    Err(reason) => toasts.error(t!("home-copy-failed", reason = reason)),
                }
            });
        }
    };

    let title_class = if wide_title {
        "banner__title banner__title--wide"
    } else {
        "banner__title"
    };

    rsx! {
        div { class: "banner",
            div { class: "banner__blur banner__blur--indigo" }
            div { class: "banner__blur banner__blur--teal" }
            div { class: "banner__grid" }
            div { class: "banner__scan",
                div { class: "banner__scan-track" }
            }

            div { class: "banner__content",
                h1 { class: "{title_class}",
                    {t!("home-title-lead")}
                    br {}
                    span { class: "banner__title-accent", {t!("home-title-accent")} }
                }
                p { class: "banner__tagline", {t!("home-tagline")} }

                div { class: "base-url",
                    input {
                        class: "base-url__input",
                        readonly: true,
                        value: "{address}",
                        aria_label: t!("home-base-url-label"),
                    }
                    div { class: "base-url__suffix",
                        EndpointCarousel {
                            endpoints: config.endpoints.clone(),
                            interval_ms: config.rotate_interval_ms,
                        }
                        button {
                            r#type: "button",
                            class: "base-url__copy",
                            title: t!("home-copy-base-url"),
                            aria_label: t!("home-copy-base-url"),
                            onclick: copy_address,
                            "⧉"
                        }
                    }
                }

                div { class: "banner__actions",
                    a { class: "button button--primary button--pill", href: "{config.console_route}",
                        span { class: "button__icon", aria_hidden: "true", "▶" }
                        {t!("home-get-key")}
                    }
                    if let Some(version) = version {
                        a {
                            class: "button button--ghost button--pill",
                            href: "{config.repository_url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{version}"
                        }
                    }
                }

                PlanSection {
                    entries: plans,
                    quota: quota,
                    checkout_route: config.checkout_route.clone(),
                }
            }
        }
    }
}
