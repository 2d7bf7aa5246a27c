//! Forgiving field decoders.
//!
//! The console backend is loose about types: prices may arrive as `20`,
//! `20.5` or `"20.50"`, flags as `true`, `1` or `"true"`, and any field may
//! be `null` or missing. These helpers coerce what looks right and map the
//! rest to a neutral value, so one odd field never fails a whole payload.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}

pub(crate) fn coerce_f64(value: Option<&Value>) -> f64 {
    value
        .and_then(number_from_value)
        .filter(|number| number.is_finite())
        .unwrap_or(0.0)
}

pub(crate) fn coerce_u64(value: Option<&Value>) -> u64 {
    let number = coerce_f64(value);
    if number <= 0.0 {
        0
    } else {
        number.trunc() as u64
    }
}

fn flag_from_value(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => number.as_f64().map(|n| n != 0.0),
        Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

pub(crate) fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(coerce_f64(value.as_ref()))
}

pub(crate) fn u64_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(coerce_u64(value.as_ref()))
}

/// `None` when absent, `null` or not numeric; otherwise the finite number.
pub(crate) fn optional_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(number_from_value)
        .filter(|number| number.is_finite()))
}

pub(crate) fn bool_or_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(flag_from_value).unwrap_or(false))
}

/// Keeps "absent" apart from an explicit `false`.
pub(crate) fn optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(flag_from_value))
}

pub(crate) fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) => text,
        Some(Value::Number(number)) => number.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_and_numeric_strings_are_accepted() {
        assert_eq!(coerce_f64(Some(&json!(20))), 20.0);
        assert_eq!(coerce_f64(Some(&json!(19.99))), 19.99);
        assert_eq!(coerce_f64(Some(&json!(" 7.5 "))), 7.5);
    }

    #[test]
    fn garbage_becomes_zero() {
        assert_eq!(coerce_f64(None), 0.0);
        assert_eq!(coerce_f64(Some(&json!(null))), 0.0);
        assert_eq!(coerce_f64(Some(&json!("abc"))), 0.0);
        assert_eq!(coerce_f64(Some(&json!([1, 2]))), 0.0);
        assert_eq!(coerce_f64(Some(&json!("NaN"))), 0.0);
    }

    #[test]
    fn flags_accept_loose_spellings() {
        assert_eq!(flag_from_value(&json!(true)), Some(true));
        assert_eq!(flag_from_value(&json!(0)), Some(false));
        assert_eq!(flag_from_value(&json!(" TRUE ")), Some(true));
        assert_eq!(flag_from_value(&json!("0")), Some(false));
        assert_eq!(flag_from_value(&json!(null)), None);
        assert_eq!(flag_from_value(&json!("maybe")), None);
        assert_eq!(flag_from_value(&json!({})), None);
    }

    #[test]
    fn unsigned_coercion_truncates_and_clamps() {
        assert_eq!(coerce_u64(Some(&json!(3.9))), 3);
        assert_eq!(coerce_u64(Some(&json!(-4))), 0);
        assert_eq!(coerce_u64(Some(&json!("25000000"))), 25_000_000);
    }
}
