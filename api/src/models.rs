//! Payload types served by the console backend.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::lenient::{
    bool_or_false, f64_or_zero, optional_bool, optional_f64, string_or_empty, u64_or_zero,
};

/// One line of a plan's feature list. Disabled features are still listed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanFeature {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub text: String,
    #[serde(default, deserialize_with = "bool_or_false")]
    pub enabled: bool,
}

impl PlanFeature {
    pub fn new(text: impl Into<String>, enabled: bool) -> Self {
        Self {
            text: text.into(),
            enabled,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPlan {
    #[serde(default, deserialize_with = "u64_or_zero")]
    pub id: u64,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub title: String,
    /// Decimal currency units.
    #[serde(default, deserialize_with = "f64_or_zero")]
    pub price_amount: f64,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub currency: String,
    /// Quota units; 0 means unlimited.
    #[serde(default, deserialize_with = "u64_or_zero")]
    pub total_amount: u64,
    /// 0 means no per-user limit.
    #[serde(default, deserialize_with = "u64_or_zero")]
    pub max_purchase_per_user: u64,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub duration_unit: String,
    #[serde(default, deserialize_with = "u64_or_zero")]
    pub duration_value: u64,
    /// Only meaningful when `duration_unit == "custom"`.
    #[serde(default, deserialize_with = "u64_or_zero")]
    pub custom_seconds: u64,
    #[serde(default, deserialize_with = "features_or_empty")]
    pub features: Vec<PlanFeature>,
}

/// The `{ plan }` wrapper the plans endpoint returns per row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanEntry {
    #[serde(default)]
    pub plan: Option<SubscriptionPlan>,
}

impl From<SubscriptionPlan> for PlanEntry {
    fn from(plan: SubscriptionPlan) -> Self {
        Self { plan: Some(plan) }
    }
}

/// Public site status (`/api/status`), reduced to the fields the home
/// screen reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteStatus {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub server_address: String,
    #[serde(default, deserialize_with = "bool_or_false")]
    pub demo_site_enabled: bool,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub version: String,
    /// `None` when the backend does not report it.
    #[serde(default, deserialize_with = "optional_f64")]
    pub quota_per_unit: Option<f64>,
    #[serde(default, deserialize_with = "optional_bool")]
    pub display_in_currency: Option<bool>,
}

/// Decode plan rows one at a time. A row that still fails after the
/// lenient field decoding is logged and left out; the others survive.
pub fn plan_entries_from_rows(rows: Vec<Value>) -> Vec<PlanEntry> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value::<PlanEntry>(row) {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(index, "Skipping malformed plan row: {err}");
                None
            }
        })
        .collect()
}

// Anything but an array is no features; array items that are not feature
// objects are dropped.
fn features_or_empty<'de, D>(deserializer: D) -> Result<Vec<PlanFeature>, D::Error>
where
    D: Deserializer<'de>,
{
    let features = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    };
    Ok(features)
}
