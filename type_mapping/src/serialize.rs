//! Serialization utilities
//!
//! This module converts loosely typed input (JSON bodies, query strings)
//! into `PostgresValue`.

use crate::types::{PgType, PostgresValue};
use serde_json::Value;

/// Convert a scalar JSON value into a bind value.
///
/// Integers that fit in `i32` become `Integer`, wider ones `BigInt`, any
/// other number `Float`. A bare `null` carries no column type and is sent
/// as a TEXT null. Arrays and objects have no scalar mapping and return
/// `None`.
pub fn from_json_value(value: &Value) -> Option<PostgresValue> {
    match value {
        Value::String(s) => Some(PostgresValue::Text(s.clone())),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                if i >= i32::MIN as i64 && i <= i32::MAX as i64 {
                    Some(PostgresValue::Integer(i as i32))
                } else {
                    Some(PostgresValue::BigInt(i))
                }
            } else {
                n.as_f64().map(PostgresValue::Float)
            }
        }
        Value::Bool(b) => Some(PostgresValue::Boolean(*b)),
        Value::Null => Some(PostgresValue::Null(PgType::Text)),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Parse a numeric string (as found in query strings) into a bind value.
///
/// Returns `None` for anything that is not a finite number.
pub fn parse_numeric_str(raw: &str) -> Option<PostgresValue> {
    let trimmed = raw.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return from_json_value(&Value::from(i));
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() => Some(PostgresValue::Float(f)),
        _ => None,
    }
}
