//! Formatting helpers for prices and quota amounts.

use api::SiteStatus;

/// Quota units per currency unit when the backend does not say otherwise.
pub const DEFAULT_QUOTA_PER_UNIT: f64 = 500_000.0;

/// Fixed two-decimal amount; non-finite or negative input renders as `0.00`.
pub fn format_price(amount: f64) -> String {
    let amount = if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    };
    format!("{amount:.2}")
}

/// `$20.00`
pub fn format_dollars(amount: f64) -> String {
    format!("${}", format_price(amount))
}

// Values from here up round to `1000.0` of the smaller unit, so they move
// to the next one instead.
const BILLIONS_FROM: u64 = 999_950_000;
const MILLIONS_FROM: u64 = 999_950;

/// Compact rendering of large integers: `1.5B`, `25.0M`, `12.3k`.
pub fn format_compact(value: u64) -> String {
    let v = value as f64;
    if value >= BILLIONS_FROM {
        format!("{:.1}B", v / 1_000_000_000.0)
    } else if value >= MILLIONS_FROM {
        format!("{:.1}M", v / 1_000_000.0)
    } else if value >= 10_000 {
        format!("{:.1}k", v / 1_000.0)
    } else {
        value.to_string()
    }
}

/// How quota amounts are shown to the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuotaDisplay {
    pub quota_per_unit: f64,
    pub display_in_currency: bool,
}

impl Default for QuotaDisplay {
    fn default() -> Self {
        Self {
            quota_per_unit: DEFAULT_QUOTA_PER_UNIT,
            display_in_currency: true,
        }
    }
}

impl QuotaDisplay {
    /// Unreported settings fall back to [`QuotaDisplay::default`] one by one.
    pub fn from_status(status: &SiteStatus) -> Self {
        let defaults = Self::default();
        Self {
            quota_per_unit: status
                .quota_per_unit
                .filter(|per_unit| *per_unit > 0.0)
                .unwrap_or(defaults.quota_per_unit),
            display_in_currency: status
                .display_in_currency
                .unwrap_or(defaults.display_in_currency),
        }
    }

    pub fn render(&self, quota: u64) -> String {
        if !self.display_in_currency || self.quota_per_unit <= 0.0 {
            return format_compact(quota);
        }
        let amount = quota as f64 / self.quota_per_unit;
        let rounded = format!("{amount:.2}");
        if quota > 0 && rounded == "0.00" {
            // Never show a positive allowance as zero.
            return "$0.01".to_string();
        }
        format!("${rounded}")
    }
}
