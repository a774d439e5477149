//! Runtime values for schema rows.

use chrono::NaiveDateTime;

use crate::types::SqlType;

/// Timestamp wire format used for JSON projections.
///
/// Fractional seconds are emitted only when present, and both `T` and
/// space separators are accepted on input (the public data dumps use both).
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const DATETIME_FORMAT_SPACE: &str = "%Y-%m-%d %H:%M:%S%.f";

/// A single column value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL NULL.
    Null,
    /// 32-bit integer.
    Int(i32),
    /// 64-bit integer.
    BigInt(i64),
    /// Boolean flag.
    Bool(bool),
    /// String value (bounded or unbounded).
    Text(String),
    /// Naive timestamp.
    DateTime(NaiveDateTime),
}

impl Value {
    /// Whether this value is NULL.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Extract an `i32`, if this value holds one.
    #[must_use]
    pub const fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Extract an `i64`. `Int` widens losslessly.
    #[must_use]
    pub const fn as_big_int(&self) -> Option<i64> {
        match self {
            Value::BigInt(v) => Some(*v),
            Value::Int(v) => Some(*v as i64),
            _ => None,
        }
    }

    /// Extract a `bool`, if this value holds one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Extract a string slice, if this value holds text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Extract a timestamp, if this value holds one.
    #[must_use]
    pub const fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Value::DateTime(v) => Some(*v),
            _ => None,
        }
    }

    /// Character length for textual values, used by length validation.
    #[must_use]
    pub fn text_len(&self) -> Option<usize> {
        match self {
            Value::Text(v) => Some(v.chars().count()),
            _ => None,
        }
    }

    /// Convert to a JSON value for the naming projections.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Int(v) => serde_json::Value::from(*v),
            Value::BigInt(v) => serde_json::Value::from(*v),
            Value::Bool(v) => serde_json::Value::from(*v),
            Value::Text(v) => serde_json::Value::from(v.clone()),
            Value::DateTime(v) => {
                serde_json::Value::from(v.format(DATETIME_FORMAT).to_string())
            }
        }
    }

    /// Parse a JSON value back into a `Value`, directed by the column type.
    ///
    /// Returns `None` when the JSON shape does not fit the declared type;
    /// the caller attaches table/field context to the failure.
    #[must_use]
    pub fn from_json(json: &serde_json::Value, sql_type: SqlType) -> Option<Value> {
        if json.is_null() {
            return Some(Value::Null);
        }
        match sql_type {
            SqlType::Integer => json
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .map(Value::Int),
            SqlType::BigInt => json.as_i64().map(Value::BigInt),
            SqlType::Boolean => json.as_bool().map(Value::Bool),
            SqlType::DateTime => json.as_str().and_then(parse_datetime).map(Value::DateTime),
            SqlType::Varchar(_) | SqlType::Text => {
                json.as_str().map(|s| Value::Text(s.to_string()))
            }
        }
    }
}

fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, DATETIME_FORMAT_SPACE))
        .ok()
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::BigInt(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::DateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, mo: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(12, 30, 45)
            .unwrap()
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Int(7).as_int(), Some(7));
        assert_eq!(Value::Int(7).as_big_int(), Some(7));
        assert_eq!(Value::BigInt(9).as_big_int(), Some(9));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Text("hi".into()).as_str(), Some("hi"));
        assert!(Value::Null.is_null());
        assert_eq!(Value::Null.as_int(), None);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(Some(3)), Value::Int(3));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::Text("x".to_string()));
    }

    #[test]
    fn test_text_len_counts_chars() {
        assert_eq!(Value::Text("héllo".into()).text_len(), Some(5));
        assert_eq!(Value::Int(1).text_len(), None);
    }

    #[test]
    fn test_json_round_trip_datetime() {
        let v = Value::DateTime(dt(2010, 6, 1));
        let json = v.to_json();
        assert_eq!(json, serde_json::json!("2010-06-01T12:30:45"));
        assert_eq!(Value::from_json(&json, SqlType::DateTime), Some(v));
    }

    #[test]
    fn test_json_datetime_accepts_space_separator() {
        let json = serde_json::json!("2010-06-01 12:30:45");
        assert_eq!(
            Value::from_json(&json, SqlType::DateTime),
            Some(Value::DateTime(dt(2010, 6, 1)))
        );
    }

    #[test]
    fn test_json_type_mismatch_is_none() {
        assert_eq!(
            Value::from_json(&serde_json::json!("abc"), SqlType::Integer),
            None
        );
        assert_eq!(
            Value::from_json(&serde_json::json!(12), SqlType::DateTime),
            None
        );
    }

    #[test]
    fn test_json_null_is_null_for_any_type() {
        let json = serde_json::Value::Null;
        assert_eq!(Value::from_json(&json, SqlType::Integer), Some(Value::Null));
        assert_eq!(Value::from_json(&json, SqlType::Text), Some(Value::Null));
    }

    #[test]
    fn test_json_integer_overflow_rejected() {
        let json = serde_json::json!(i64::from(i32::MAX) + 1);
        assert_eq!(Value::from_json(&json, SqlType::Integer), None);
        assert!(Value::from_json(&json, SqlType::BigInt).is_some());
    }
}
