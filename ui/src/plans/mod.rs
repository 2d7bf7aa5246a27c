//! Subscription plan grid: fetch, derive, render.

mod fetch;
pub use fetch::fetch_plans;

mod presenter;
pub use presenter::{
    featured_plan, highest_price, secondary_plans, PlanCard, PlanDuration, PlanListState,
    PlanShowcase, PlanView,
};

mod view;
pub use view::PlanSection;
