use api::{ConsoleApi, PlanEntry};
use tracing::{debug, warn};

/// Load the plan list. Any failure (transport, HTTP status, malformed body,
/// `success=false`) degrades to an empty list so the grid shows its empty
/// state instead of an error.
pub async fn fetch_plans<A: ConsoleApi>(api: &A) -> Vec<PlanEntry> {
    match api.subscription_plans().await {
        Ok(entries) => {
            debug!(count = entries.len(), "subscription plans loaded");
            entries
        }
        Err(err) => {
            warn!("Subscription plans unavailable: {err}");
            Vec::new()
        }
    }
}
