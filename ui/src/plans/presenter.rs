//! Pure derivations from the fetched plan list.
//!
//! Nothing here touches signals or the network: the grid component feeds
//! in the latest list and renders whatever [`PlanListState::view`] returns.

use api::{PlanEntry, PlanFeature, SubscriptionPlan};
use fluent::FluentValue;

use crate::core::format::{format_price, QuotaDisplay};
use crate::t;

const DEFAULT_CURRENCY: &str = "USD";

/// The `plan` of the first row, if any.
pub fn featured_plan(entries: &[PlanEntry]) -> Option<&SubscriptionPlan> {
    entries.first()?.plan.as_ref()
}

/// Every row after the first.
pub fn secondary_plans(entries: &[PlanEntry]) -> &[PlanEntry] {
    entries.get(1..).unwrap_or(&[])
}

/// Highest price in the list, starting from 0. Missing plans and invalid
/// prices count as 0, so the result is never negative.
pub fn highest_price(entries: &[PlanEntry]) -> f64 {
    entries
        .iter()
        .map(|entry| entry.plan.as_ref().map_or(0.0, |plan| plan.price_amount))
        .fold(0.0, |max, price| {
            if price.is_finite() && price > max {
                price
            } else {
                max
            }
        })
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlanListState {
    pub entries: Vec<PlanEntry>,
    /// While set, `entries` is not authoritative and is not rendered.
    pub loading: bool,
}

impl PlanListState {
    pub fn loading() -> Self {
        Self {
            entries: Vec::new(),
            loading: true,
        }
    }

    pub fn loaded(entries: Vec<PlanEntry>) -> Self {
        Self {
            entries,
            loading: false,
        }
    }

    /// `None` from the fetch resource means the request is still in flight.
    pub fn from_resource(entries: Option<Vec<PlanEntry>>) -> Self {
        entries.map_or_else(Self::loading, Self::loaded)
    }

    pub fn view(&self, quota: &QuotaDisplay) -> PlanView {
        if self.loading {
            return PlanView::Loading;
        }
        if self.entries.is_empty() {
            return PlanView::Empty;
        }

        let fallback = SubscriptionPlan::default();
        let featured = PlanCard::from_plan(
            featured_plan(&self.entries).unwrap_or(&fallback),
            0,
            quota,
        );
        let secondary = secondary_plans(&self.entries)
            .iter()
            .enumerate()
            .map(|(offset, entry)| {
                PlanCard::from_plan(entry.plan.as_ref().unwrap_or(&fallback), offset + 1, quota)
            })
            .collect();

        PlanView::Populated(PlanShowcase {
            featured,
            secondary,
            plan_count: self.entries.len(),
            highest_price: highest_price(&self.entries),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlanView {
    Loading,
    Empty,
    Populated(PlanShowcase),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanShowcase {
    pub featured: PlanCard,
    pub secondary: Vec<PlanCard>,
    pub plan_count: usize,
    pub highest_price: f64,
}

impl PlanShowcase {
    pub fn cards(&self) -> impl Iterator<Item = &PlanCard> {
        std::iter::once(&self.featured).chain(self.secondary.iter())
    }
}

/// Display-ready values for one plan card.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanCard {
    pub key: String,
    /// `None` when the plan has no usable title.
    pub title: Option<String>,
    pub price: String,
    pub currency: String,
    /// `None` renders as "unlimited".
    pub quota: Option<String>,
    /// Only present when the plan caps purchases per user.
    pub purchase_limit: Option<u64>,
    pub duration: PlanDuration,
    pub features: Vec<PlanFeature>,
    pub featured: bool,
}

impl PlanCard {
    pub fn from_plan(plan: &SubscriptionPlan, index: usize, quota: &QuotaDisplay) -> Self {
        let title = Some(plan.title.trim())
            .filter(|title| !title.is_empty())
            .map(str::to_string);
        let currency = Some(plan.currency.trim())
            .filter(|currency| !currency.is_empty())
            .unwrap_or(DEFAULT_CURRENCY)
            .to_uppercase();

        Self {
            key: if plan.id > 0 {
                format!("plan-{}", plan.id)
            } else {
                format!("plan-index-{index}")
            },
            title,
            price: format_price(plan.price_amount),
            currency,
            quota: (plan.total_amount > 0).then(|| quota.render(plan.total_amount)),
            purchase_limit: (plan.max_purchase_per_user > 0).then_some(plan.max_purchase_per_user),
            duration: PlanDuration::from_plan(plan),
            features: plan.features.clone(),
            featured: index == 0,
        }
    }
}

/// Normalised subscription length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanDuration {
    Years(u64),
    Months(u64),
    Days(u64),
    Hours(u64),
    Seconds(u64),
    /// Unit the console does not know; rendered verbatim.
    Other { unit: String, value: u64 },
}

impl PlanDuration {
    pub fn from_plan(plan: &SubscriptionPlan) -> Self {
        let unit = match plan.duration_unit.trim() {
            "" => "month",
            unit => unit,
        };
        let value = plan.duration_value.max(1);

        match unit {
            "year" => Self::Years(value),
            "month" => Self::Months(value),
            "day" => Self::Days(value),
            "hour" => Self::Hours(value),
            "custom" => {
                let seconds = plan.custom_seconds;
                if seconds >= 86_400 {
                    Self::Days(seconds / 86_400)
                } else if seconds >= 3_600 {
                    Self::Hours(seconds / 3_600)
                } else {
                    Self::Seconds(seconds)
                }
            }
            other => Self::Other {
                unit: other.to_string(),
                value,
            },
        }
    }

    pub fn label(&self) -> String {
        // Fluent plural selection needs a numeric argument.
        let number = |count: &u64| FluentValue::from(*count);
        match self {
            Self::Years(count) => t!("duration-year", count = number(count)),
            Self::Months(count) => t!("duration-month", count = number(count)),
            Self::Days(count) => t!("duration-day", count = number(count)),
            Self::Hours(count) => t!("duration-hour", count = number(count)),
            Self::Seconds(count) => t!("duration-second", count = number(count)),
            Self::Other { unit, value } => format!("{value} {unit}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(id: u64, price: f64) -> PlanEntry {
        SubscriptionPlan {
            id,
            title: format!("Plan {id}"),
            price_amount: price,
            ..SubscriptionPlan::default()
        }
        .into()
    }

    #[test]
    fn highest_price_is_true_maximum() {
        let entries = vec![plan(1, 5.0), plan(2, 100.0), plan(3, 20.0)];
        assert_eq!(highest_price(&entries), 100.0);
    }

    #[test]
    fn highest_price_ignores_missing_and_invalid() {
        let entries = vec![
            PlanEntry::default(),
            plan(2, f64::NAN),
            plan(3, -40.0),
            plan(4, 12.5),
        ];
        assert_eq!(highest_price(&entries), 12.5);
        assert_eq!(highest_price(&[PlanEntry::default(), plan(9, -1.0)]), 0.0);
        assert_eq!(highest_price(&[]), 0.0);
    }

    #[test]
    fn featured_and_secondary_split() {
        let entries = vec![plan(1, 5.0), plan(2, 20.0), plan(3, 100.0)];
        assert_eq!(featured_plan(&entries).map(|p| p.id), Some(1));
        assert_eq!(secondary_plans(&entries).len(), 2);

        let single = vec![plan(1, 5.0)];
        assert!(secondary_plans(&single).is_empty());

        assert!(featured_plan(&[]).is_none());
        assert!(secondary_plans(&[]).is_empty());
    }

    #[test]
    fn featured_plan_is_none_when_first_row_lacks_plan() {
        let entries = vec![PlanEntry::default(), plan(2, 20.0)];
        assert!(featured_plan(&entries).is_none());
        assert_eq!(secondary_plans(&entries).len(), 1);
    }

    #[test]
    fn view_priority_is_loading_then_empty_then_populated() {
        let quota = QuotaDisplay::default();

        let mut loading = PlanListState::loaded(vec![plan(1, 5.0)]);
        loading.loading = true;
        assert_eq!(loading.view(&quota), PlanView::Loading);

        assert_eq!(PlanListState::loaded(Vec::new()).view(&quota), PlanView::Empty);
        assert_eq!(PlanListState::from_resource(None).view(&quota), PlanView::Loading);

        let PlanView::Populated(showcase) =
            PlanListState::loaded(vec![plan(1, 5.0), plan(2, 20.0), plan(3, 100.0)]).view(&quota)
        else {
            panic!("expected populated view");
        };
        assert_eq!(showcase.plan_count, 3);
        assert_eq!(showcase.highest_price, 100.0);
        assert_eq!(showcase.secondary.len(), 2);
        assert!(showcase.featured.featured);
        assert!(showcase.secondary.iter().all(|card| !card.featured));
        assert_eq!(showcase.cards().count(), 3);
    }

    #[test]
    fn card_formatting() {
        let source = SubscriptionPlan {
            id: 2,
            title: "  Standard ".into(),
            price_amount: 20.0,
            currency: "usd".into(),
            total_amount: 25_000_000,
            max_purchase_per_user: 3,
            duration_unit: "month".into(),
            duration_value: 1,
            features: vec![
                PlanFeature::new("Base models", true),
                PlanFeature::new("Priority lane", false),
            ],
            ..SubscriptionPlan::default()
        };
        let card = PlanCard::from_plan(&source, 1, &QuotaDisplay::default());

        assert_eq!(card.key, "plan-2");
        assert_eq!(card.title.as_deref(), Some("Standard"));
        assert_eq!(card.price, "20.00");
        assert_eq!(card.currency, "USD");
        assert_eq!(card.quota.as_deref(), Some("$50.00"));
        assert_eq!(card.purchase_limit, Some(3));
        assert_eq!(card.duration, PlanDuration::Months(1));
        assert_eq!(card.features.len(), 2, "disabled features stay listed");
        assert!(!card.featured);
    }

    #[test]
    fn unlimited_and_untitled_cards() {
        let card = PlanCard::from_plan(&SubscriptionPlan::default(), 4, &QuotaDisplay::default());
        assert_eq!(card.key, "plan-index-4");
        assert_eq!(card.title, None);
        assert_eq!(card.quota, None);
        assert_eq!(card.purchase_limit, None);
        assert_eq!(card.price, "0.00");
        assert_eq!(card.currency, "USD");
    }

    #[test]
    fn durations_normalise() {
        let with = |unit: &str, value: u64, custom_seconds: u64| {
            PlanDuration::from_plan(&SubscriptionPlan {
                duration_unit: unit.into(),
                duration_value: value,
                custom_seconds,
                ..SubscriptionPlan::default()
            })
        };

        assert_eq!(with("", 0, 0), PlanDuration::Months(1));
        assert_eq!(with("year", 2, 0), PlanDuration::Years(2));
        assert_eq!(with("day", 30, 0), PlanDuration::Days(30));
        assert_eq!(with("custom", 0, 172_800), PlanDuration::Days(2));
        assert_eq!(with("custom", 0, 7_200), PlanDuration::Hours(2));
        assert_eq!(with("custom", 0, 90), PlanDuration::Seconds(90));
        assert_eq!(
            with("fortnight", 1, 0),
            PlanDuration::Other {
                unit: "fortnight".into(),
                value: 1
            }
        );
    }

    #[test]
    fn duration_labels_include_count() {
        crate::i18n::init();
        assert!(PlanDuration::Days(30).label().contains("30"));
        assert_eq!(
            PlanDuration::Other {
                unit: "fortnight".into(),
                value: 2
            }
            .label(),
            "2 fortnight"
        );
    }

    #[test]
    fn duration_counts_drive_plural_selection() {
        crate::i18n::init();
        if crate::i18n::current_language() != "en-US" {
            return;
        }
        assert_eq!(PlanDuration::Days(1).label(), "1 day");
        assert_eq!(PlanDuration::Days(30).label(), "30 days");
        assert_eq!(PlanDuration::Months(1).label(), "1 month");
    }
}
