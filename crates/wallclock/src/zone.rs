//! Classification of raw client timezone parameters.
//!
//! A web layer hands the core a timezone parameter that may be a named zone
//! identifier (`"Europe/Kiev"`), a raw offset in seconds (`18000`,
//! `"-12600.0"`), or nothing at all. [`ZoneSpec`] resolves that polymorphism
//! once at the boundary; everything downstream switches on the variant
//! instead of re-inspecting raw input.

use serde::Serialize;
use serde_json::Value;

/// How the caller expressed a timezone.
///
/// Classification is total: every raw input maps to exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub enum ZoneSpec {
    /// No zone given; the system default and session state decide.
    #[default]
    Unspecified,
    /// A named zone identifier, e.g. `"Europe/Kiev"`.
    Named(String),
    /// A raw shift from the parse zone, in seconds.
    OffsetSeconds(i64),
}

impl ZoneSpec {
    /// Classify a raw string parameter.
    ///
    /// Numeric strings (integer or float, optional sign) are offsets with
    /// fractional seconds truncated toward zero; any other non-empty string
    /// is a named zone; `None` and empty strings are
    /// [`ZoneSpec::Unspecified`].
    pub fn classify(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return ZoneSpec::Unspecified;
        };
        let raw = raw.trim();
        if raw.is_empty() {
            ZoneSpec::Unspecified
        } else if let Some(seconds) = parse_numeric(raw) {
            ZoneSpec::OffsetSeconds(seconds)
        } else {
            ZoneSpec::Named(raw.to_string())
        }
    }

    /// Classify a JSON parameter value (string-or-number-or-null).
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => ZoneSpec::Unspecified,
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ZoneSpec::OffsetSeconds(i)
                } else if let Some(f) = n.as_f64() {
                    ZoneSpec::OffsetSeconds(f as i64)
                } else {
                    ZoneSpec::Unspecified
                }
            }
            Value::String(s) => Self::classify(Some(s)),
            _ => ZoneSpec::Unspecified,
        }
    }
}

impl From<i64> for ZoneSpec {
    fn from(seconds: i64) -> Self {
        ZoneSpec::OffsetSeconds(seconds)
    }
}

impl From<f64> for ZoneSpec {
    fn from(seconds: f64) -> Self {
        ZoneSpec::OffsetSeconds(seconds as i64)
    }
}

/// Parse a signed integer or float string into whole seconds.
fn parse_numeric(s: &str) -> Option<i64> {
    if let Ok(n) = s.parse::<i64>() {
        return Some(n);
    }
    s.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(|f| f as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_absent_is_unspecified() {
        assert_eq!(ZoneSpec::classify(None), ZoneSpec::Unspecified);
        assert_eq!(ZoneSpec::classify(Some("")), ZoneSpec::Unspecified);
        assert_eq!(ZoneSpec::classify(Some("   ")), ZoneSpec::Unspecified);
    }

    #[test]
    fn test_classify_named() {
        assert_eq!(
            ZoneSpec::classify(Some("Europe/Kiev")),
            ZoneSpec::Named("Europe/Kiev".to_string())
        );
        assert_eq!(
            ZoneSpec::classify(Some("GMT+3")),
            ZoneSpec::Named("GMT+3".to_string())
        );
    }

    #[test]
    fn test_classify_numeric_strings() {
        assert_eq!(
            ZoneSpec::classify(Some("18000")),
            ZoneSpec::OffsetSeconds(18000)
        );
        assert_eq!(
            ZoneSpec::classify(Some("+18000")),
            ZoneSpec::OffsetSeconds(18000)
        );
        assert_eq!(
            ZoneSpec::classify(Some("-18000.0")),
            ZoneSpec::OffsetSeconds(-18000)
        );
    }

    #[test]
    fn test_classify_truncates_fractional_seconds() {
        assert_eq!(
            ZoneSpec::classify(Some("18000.9")),
            ZoneSpec::OffsetSeconds(18000)
        );
        assert_eq!(
            ZoneSpec::classify(Some("-0.5")),
            ZoneSpec::OffsetSeconds(0)
        );
    }

    #[test]
    fn test_from_value_variants() {
        assert_eq!(ZoneSpec::from_value(&Value::Null), ZoneSpec::Unspecified);
        assert_eq!(
            ZoneSpec::from_value(&json!(18000)),
            ZoneSpec::OffsetSeconds(18000)
        );
        assert_eq!(
            ZoneSpec::from_value(&json!(-12600.0)),
            ZoneSpec::OffsetSeconds(-12600)
        );
        assert_eq!(
            ZoneSpec::from_value(&json!("Europe/Kiev")),
            ZoneSpec::Named("Europe/Kiev".to_string())
        );
        assert_eq!(
            ZoneSpec::from_value(&json!("-18000")),
            ZoneSpec::OffsetSeconds(-18000)
        );
        assert_eq!(ZoneSpec::from_value(&json!(true)), ZoneSpec::Unspecified);
    }

    #[test]
    fn test_from_number_conversions() {
        assert_eq!(ZoneSpec::from(18000i64), ZoneSpec::OffsetSeconds(18000));
        assert_eq!(ZoneSpec::from(-12600.5f64), ZoneSpec::OffsetSeconds(-12600));
    }
}
