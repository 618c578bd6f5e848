//! Modifier rules and caller-supplied modifier values
//!
//! A modifier adjusts a node's base price. The rule side ([`ModifierRule`])
//! comes from the pricing table; the value side ([`ModifierValue`]) arrives
//! with each request as raw JSON and is kept loosely typed so route handlers
//! can pass request payloads through unfiltered.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// How a modifier's value is turned into a price adjustment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModifierKind {
    /// value × price_per_unit
    PerUnit,
    /// Same arithmetic as per-unit, labelled in megabytes
    PerMb,
    /// Same arithmetic as per-unit, labelled in kilobytes
    PerKb,
    /// Flat surcharge when the value is truthy
    Boolean,
    /// Scales the running total by price_per_unit
    Multiplier,
    /// Unrecognized kind from config, applied as a zero-cost no-op
    Other(String),
}

impl ModifierKind {
    /// The kind's config identifier
    pub fn as_str(&self) -> &str {
        match self {
            ModifierKind::PerUnit => "per_unit",
            ModifierKind::PerMb => "per_mb",
            ModifierKind::PerKb => "per_kb",
            ModifierKind::Boolean => "boolean",
            ModifierKind::Multiplier => "multiplier",
            ModifierKind::Other(raw) => raw,
        }
    }

    /// Whether this kind is one of the recognized pricing kinds
    pub fn is_known(&self) -> bool {
        !matches!(self, ModifierKind::Other(_))
    }
}

impl From<String> for ModifierKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "per_unit" => ModifierKind::PerUnit,
            "per_mb" => ModifierKind::PerMb,
            "per_kb" => ModifierKind::PerKb,
            "boolean" => ModifierKind::Boolean,
            "multiplier" => ModifierKind::Multiplier,
            _ => ModifierKind::Other(raw),
        }
    }
}

impl From<ModifierKind> for String {
    fn from(kind: ModifierKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single modifier rule attached to a node type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierRule {
    /// Key looked up in the caller-supplied modifier map
    pub name: String,
    /// How the value is priced
    #[serde(rename = "type")]
    pub kind: ModifierKind,
    /// Per-unit price, flat surcharge, or multiplicative factor
    pub price_per_unit: Decimal,
}

impl ModifierRule {
    /// Create a new modifier rule
    pub fn new(name: impl Into<String>, kind: ModifierKind, price_per_unit: Decimal) -> Self {
        Self {
            name: name.into(),
            kind,
            price_per_unit,
        }
    }
}

/// A caller-supplied modifier value, as it arrives in request JSON
///
/// Untagged variants are tried in declaration order: `Text` sits before
/// `Number` so JSON strings stay strings even when they parse as numbers.
/// Serialization mirrors the JSON types back out (numbers as numbers).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ModifierValue {
    /// Explicit null, skipped exactly like an omitted key
    Null,
    /// Boolean toggle
    Bool(bool),
    /// Raw string; numeric strings still count as quantities
    Text(String),
    /// Numeric quantity, threshold, or flag
    Number(Decimal),
}

impl ModifierValue {
    /// Truthiness following the conventions of the request payloads:
    /// null, false, zero, and the empty string are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            ModifierValue::Null => false,
            ModifierValue::Bool(b) => *b,
            ModifierValue::Text(s) => !s.is_empty(),
            ModifierValue::Number(n) => !n.is_zero(),
        }
    }

    /// Numeric quantity for per-unit arithmetic
    ///
    /// Booleans coerce to 1/0 and numeric strings parse; `None` means the
    /// value has no numeric interpretation.
    pub fn as_quantity(&self) -> Option<Decimal> {
        match self {
            ModifierValue::Null => None,
            ModifierValue::Bool(true) => Some(Decimal::ONE),
            ModifierValue::Bool(false) => Some(Decimal::ZERO),
            ModifierValue::Text(s) => s.trim().parse().ok(),
            ModifierValue::Number(n) => Some(*n),
        }
    }

    /// Whether the value is an explicit null
    pub fn is_null(&self) -> bool {
        matches!(self, ModifierValue::Null)
    }
}

impl Serialize for ModifierValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ModifierValue::Null => serializer.serialize_unit(),
            ModifierValue::Bool(b) => serializer.serialize_bool(*b),
            ModifierValue::Text(s) => serializer.serialize_str(s),
            ModifierValue::Number(n) => rust_decimal::serde::float::serialize(n, serializer),
        }
    }
}

impl fmt::Display for ModifierValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModifierValue::Null => f.write_str("null"),
            ModifierValue::Bool(b) => write!(f, "{}", b),
            ModifierValue::Text(s) => f.write_str(s),
            ModifierValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<bool> for ModifierValue {
    fn from(b: bool) -> Self {
        ModifierValue::Bool(b)
    }
}

impl From<Decimal> for ModifierValue {
    fn from(n: Decimal) -> Self {
        ModifierValue::Number(n)
    }
}

impl From<i64> for ModifierValue {
    fn from(n: i64) -> Self {
        ModifierValue::Number(Decimal::from(n))
    }
}

impl From<&str> for ModifierValue {
    fn from(s: &str) -> Self {
        ModifierValue::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_kind_round_trip() {
        for raw in ["per_unit", "per_mb", "per_kb", "boolean", "multiplier"] {
            let kind = ModifierKind::from(raw.to_string());
            assert!(kind.is_known());
            assert_eq!(kind.as_str(), raw);
        }
    }

    #[test]
    fn test_unknown_kind_preserved() {
        let kind = ModifierKind::from("per_gb".to_string());
        assert_eq!(kind, ModifierKind::Other("per_gb".to_string()));
        assert!(!kind.is_known());

        // Unknown kinds must survive deserialization instead of failing it
        let rule: ModifierRule =
            serde_json::from_str(r#"{"name":"storage","type":"per_gb","price_per_unit":3}"#)
                .unwrap();
        assert_eq!(rule.kind.as_str(), "per_gb");
        assert_eq!(rule.price_per_unit, dec!(3));
    }

    #[test]
    fn test_kind_serializes_as_string() {
        let rule = ModifierRule::new("concurrency", ModifierKind::PerUnit, dec!(2));
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["type"], "per_unit");
    }

    #[test]
    fn test_value_json_types_preserved() {
        let values: Vec<ModifierValue> =
            serde_json::from_str(r#"[null, true, "3", 3, 2.5, "fast"]"#).unwrap();
        assert_eq!(values[0], ModifierValue::Null);
        assert_eq!(values[1], ModifierValue::Bool(true));
        assert_eq!(values[2], ModifierValue::Text("3".to_string()));
        assert_eq!(values[3], ModifierValue::Number(dec!(3)));
        assert_eq!(values[4], ModifierValue::Number(dec!(2.5)));
        assert_eq!(values[5], ModifierValue::Text("fast".to_string()));

        // Numbers serialize back as JSON numbers, not decimal strings
        let json = serde_json::to_value(&values).unwrap();
        assert_eq!(json[3], serde_json::json!(3.0));
        assert_eq!(json[2], serde_json::json!("3"));
        assert!(json[0].is_null());
    }

    #[test]
    fn test_truthiness() {
        assert!(!ModifierValue::Null.is_truthy());
        assert!(!ModifierValue::Bool(false).is_truthy());
        assert!(!ModifierValue::Number(dec!(0)).is_truthy());
        assert!(!ModifierValue::Text(String::new()).is_truthy());

        assert!(ModifierValue::Bool(true).is_truthy());
        assert!(ModifierValue::Number(dec!(0.1)).is_truthy());
        // Non-empty strings are truthy even when they parse to zero
        assert!(ModifierValue::Text("0".to_string()).is_truthy());
    }

    #[test]
    fn test_as_quantity() {
        assert_eq!(ModifierValue::Number(dec!(2.5)).as_quantity(), Some(dec!(2.5)));
        assert_eq!(ModifierValue::Bool(true).as_quantity(), Some(dec!(1)));
        assert_eq!(ModifierValue::Bool(false).as_quantity(), Some(dec!(0)));
        assert_eq!(ModifierValue::Text(" 12 ".to_string()).as_quantity(), Some(dec!(12)));
        assert_eq!(ModifierValue::Text("fast".to_string()).as_quantity(), None);
        assert_eq!(ModifierValue::Null.as_quantity(), None);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(ModifierValue::Number(dec!(10)).to_string(), "10");
        assert_eq!(ModifierValue::Bool(true).to_string(), "true");
        assert_eq!(ModifierValue::Text("fast".to_string()).to_string(), "fast");
        assert_eq!(ModifierValue::Null.to_string(), "null");
    }
}
