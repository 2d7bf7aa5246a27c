use api::PlanEntry;
use dioxus::prelude::*;

use crate::core::format::{format_dollars, QuotaDisplay};
use crate::t;

use super::presenter::{PlanCard, PlanListState, PlanShowcase, PlanView};

/// Pricing grid. `entries` is `None` while the plan request is in flight.
#[component]
pub fn PlanSection(
    entries: Option<Vec<PlanEntry>>,
    quota: QuotaDisplay,
    checkout_route: String,
) -> Element {
    let body = match PlanListState::from_resource(entries).view(&quota) {
        PlanView::Loading => rsx! {
            div { class: "plans__placeholder", {t!("plans-loading")} }
        },
        PlanView::Empty => rsx! {
            div { class: "plans__placeholder", {t!("plans-empty")} }
        },
        PlanView::Populated(showcase) => rsx! {
            PlanGrid { showcase, checkout_route }
        },
    };

    rsx! {
        section { class: "plans",
            div { class: "plans__rule",
                div { class: "plans__rule-glow" }
            }
            div { class: "plans__header",
                h2 { class: "plans__title", {t!("plans-title")} }
                p { class: "plans__subtitle", {t!("plans-subtitle")} }
                p { class: "plans__subtitle", {t!("plans-models")} }
            }

            {body}
        }
    }
}

#[component]
fn PlanGrid(showcase: PlanShowcase, checkout_route: String) -> Element {
    let plan_count = showcase.plan_count;
    let highest = format_dollars(showcase.highest_price);
    let cards: Vec<PlanCard> = showcase.cards().cloned().collect();

    rsx! {
        div { class: "plans__grid",
            for card in cards.into_iter() {
                {render_card(card, &checkout_route, plan_count, &highest)}
            }
        }
    }
}

fn render_card(card: PlanCard, checkout_route: &str, plan_count: usize, highest: &str) -> Element {
    let PlanCard {
        key,
        title,
        price,
        currency,
        quota,
        purchase_limit,
        duration,
        features,
        featured,
    } = card;

    let card_class = if featured {
        "plan-card plan-card--featured"
    } else {
        "plan-card"
    };
    let title = title.unwrap_or_else(|| t!("plans-untitled"));
    let quota = quota.unwrap_or_else(|| t!("plans-unlimited"));
    let duration = duration.label();
    let features: Vec<(String, &'static str)> = features
        .into_iter()
        .map(|feature| {
            let class = if feature.enabled {
                "plan-card__feature"
            } else {
                "plan-card__feature plan-card__feature--disabled"
            };
            (feature.text, class)
        })
        .collect();

    rsx! {
        article { key: "{key}", class: card_class,
            span { class: "plan-card__corner plan-card__corner--tl" }
            span { class: "plan-card__corner plan-card__corner--tr" }
            span { class: "plan-card__corner plan-card__corner--bl" }
            span { class: "plan-card__corner plan-card__corner--br" }

            if featured {
                div { class: "plan-card__badge", {t!("plans-recommended")} }
            }

            h3 { class: "plan-card__title", "{title}" }

            div { class: "plan-card__price",
                span { class: "plan-card__symbol", "$" }
                span { class: "plan-card__amount", "{price}" }
                span { class: "plan-card__currency", "{currency}" }
            }

            div { class: "plan-card__facts",
                div { class: "plan-card__fact",
                    span { {t!("plans-validity")} ":" }
                    span { class: "plan-card__fact-value", "{duration}" }
                }
                div { class: "plan-card__fact",
                    span { {t!("plans-total-quota")} ":" }
                    span { class: "plan-card__fact-value", "{quota}" }
                }
                if let Some(limit) = purchase_limit {
                    div { class: "plan-card__fact",
                        span { {t!("plans-purchase-limit")} ":" }
                        span { class: "plan-card__fact-value", "{limit}" }
                    }
                }

                if !features.is_empty() {
                    ul { class: "plan-card__features",
                        for (text, class) in features.into_iter() {
                            li { class: "{class}",
                                span { class: "plan-card__check", aria_hidden: "true", "✓" }
                                span { class: "plan-card__feature-text", "{text}" }
                            }
                        }
                    }
                }
            }

            a { class: "button button--primary plan-card__subscribe", href: "{checkout_route}",
                {t!("plans-subscribe")}
            }

            if featured {
                div { class: "plan-card__stats",
                    div { class: "plan-card__stat",
                        div { class: "plan-card__stat-label", {t!("plans-available")} }
                        div { class: "plan-card__stat-value", "{plan_count}" }
                    }
                    div { class: "plan-card__stat",
                        div { class: "plan-card__stat-label", {t!("plans-top-tier")} }
                        div { class: "plan-card__stat-value", "{highest}" }
                    }
                }
            }
        }
    }
}
