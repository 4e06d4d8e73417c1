//! Permissive numeric parsing shared by the importer and the JSON models.
//!
//! Payroll entry is edited iteratively, so a blank or non-numeric amount is
//! treated as zero instead of rejecting the whole record.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parses a user-entered amount, returning zero when it is not a number.
///
/// Accepts Arabic-Indic and Persian digits, the Arabic decimal separator,
/// and ignores thousands separators and embedded spaces.
///
/// # Examples
///
/// ```
/// use payroll_engine::models::parse_decimal;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_decimal(" 3,500.50 "), Decimal::new(350050, 2));
/// assert_eq!(parse_decimal("٤٥٠٠"), Decimal::from(4500));
/// assert_eq!(parse_decimal("n/a"), Decimal::ZERO);
/// ```
pub fn parse_decimal(raw: &str) -> Decimal {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter_map(|c| match c {
            '\u{0660}'..='\u{0669}' => char::from_digit(c as u32 - 0x0660, 10),
            '\u{06F0}'..='\u{06F9}' => char::from_digit(c as u32 - 0x06F0, 10),
            '\u{066B}' => Some('.'),
            ',' | '\u{066C}' | ' ' | '\u{00A0}' => None,
            other => Some(other),
        })
        .collect();

    if cleaned.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .unwrap_or(Decimal::ZERO)
}

/// Parses an order count, truncating fractions and clamping negatives to zero.
pub fn parse_orders(raw: &str) -> u32 {
    decimal_to_orders(parse_decimal(raw))
}

fn decimal_to_orders(value: Decimal) -> u32 {
    if value.is_sign_negative() {
        return 0;
    }
    value.trunc().to_u32().unwrap_or(u32::MAX)
}

fn decimal_from_value(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s),
        _ => Decimal::ZERO,
    }
}

/// Deserializes an amount from a number, a numeric string, or null.
pub(crate) fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(decimal_from_value).unwrap_or_default())
}

/// Deserializes an order count from a number, a numeric string, or null.
pub(crate) fn orders<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .map(|v| decimal_to_orders(decimal_from_value(v)))
        .unwrap_or_default())
}

/// Deserializes an optional order bound; null and blank strings stay `None`.
pub(crate) fn optional_orders<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(v) => Some(decimal_to_orders(decimal_from_value(&v))),
    })
}

/// Deserializes a string field, accepting numbers (e.g. an iqama number typed as a number).
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[derive(Debug, Deserialize)]
    struct Fields {
        #[serde(default, deserialize_with = "decimal")]
        amount: Decimal,
        #[serde(default, deserialize_with = "orders")]
        orders: u32,
        #[serde(default, deserialize_with = "optional_orders")]
        upper: Option<u32>,
        #[serde(default, deserialize_with = "text")]
        code: String,
    }

    #[test]
    fn test_parse_plain_and_grouped_numbers() {
        assert_eq!(parse_decimal("3000"), dec("3000"));
        assert_eq!(parse_decimal("3,000.75"), dec("3000.75"));
        assert_eq!(parse_decimal("  12.5  "), dec("12.5"));
        assert_eq!(parse_decimal("-40"), dec("-40"));
    }

    #[test]
    fn test_parse_arabic_indic_digits() {
        assert_eq!(parse_decimal("٣٠٠٠"), dec("3000"));
        assert_eq!(parse_decimal("١٢٫٥"), dec("12.5"));
        assert_eq!(parse_decimal("۴۵۰"), dec("450"));
        assert_eq!(parse_decimal("٣٬٥٠٠"), dec("3500"));
    }

    #[test]
    fn test_parse_failure_is_zero() {
        assert_eq!(parse_decimal(""), Decimal::ZERO);
        assert_eq!(parse_decimal("   "), Decimal::ZERO);
        assert_eq!(parse_decimal("SAR"), Decimal::ZERO);
        assert_eq!(parse_decimal("12abc"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_scientific_notation() {
        assert_eq!(parse_decimal("1e3"), dec("1000"));
    }

    #[test]
    fn test_parse_orders_truncates_and_clamps() {
        assert_eq!(parse_orders("310.9"), 310);
        assert_eq!(parse_orders("-5"), 0);
        assert_eq!(parse_orders("abc"), 0);
    }

    #[test]
    fn test_lenient_json_accepts_numbers_strings_and_null() {
        let fields: Fields = serde_json::from_str(
            r#"{"amount": "250.5", "orders": 42, "upper": null, "code": 1023}"#,
        )
        .unwrap();
        assert_eq!(fields.amount, dec("250.5"));
        assert_eq!(fields.orders, 42);
        assert_eq!(fields.upper, None);
        assert_eq!(fields.code, "1023");

        let fields: Fields =
            serde_json::from_str(r#"{"amount": null, "orders": "x", "upper": "100"}"#).unwrap();
        assert_eq!(fields.amount, Decimal::ZERO);
        assert_eq!(fields.orders, 0);
        assert_eq!(fields.upper, Some(100));
        assert_eq!(fields.code, "");
    }

    #[test]
    fn test_lenient_missing_fields_default() {
        let fields: Fields = serde_json::from_str("{}").unwrap();
        assert_eq!(fields.amount, Decimal::ZERO);
        assert_eq!(fields.orders, 0);
        assert_eq!(fields.upper, None);
    }
}
