//! Type mapping definitions
//!
//! This module provides the bind value type handed to the store
//! alongside every `$n` placeholder.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// PostgreSQL parameter type a value is sent as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PgType {
    Text,
    Integer,
    BigInt,
    Float,
    Boolean,
    Numeric,
}

/// PostgreSQL bind value, positionally matched to a `$n` placeholder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PostgresValue {
    Text(String),
    Integer(i32),
    BigInt(i64),
    Float(f64),
    Boolean(bool),
    Numeric(Decimal),
    /// NULL sent with the parameter type of its column
    Null(PgType),
}

/// Rust types with a fixed PostgreSQL parameter type
pub trait HasPgType {
    const PG_TYPE: PgType;
}

impl HasPgType for String {
    const PG_TYPE: PgType = PgType::Text;
}

impl HasPgType for &str {
    const PG_TYPE: PgType = PgType::Text;
}

impl HasPgType for i32 {
    const PG_TYPE: PgType = PgType::Integer;
}

impl HasPgType for i64 {
    const PG_TYPE: PgType = PgType::BigInt;
}

impl HasPgType for f64 {
    const PG_TYPE: PgType = PgType::Float;
}

impl HasPgType for bool {
    const PG_TYPE: PgType = PgType::Boolean;
}

impl HasPgType for Decimal {
    const PG_TYPE: PgType = PgType::Numeric;
}

/// Renders the value as it would read as a SQL literal.
/// Only meant for logs and tests; statements always use placeholders.
impl fmt::Display for PostgresValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostgresValue::Text(s) => write!(f, "'{}'", s.replace('\'', "''")),
            PostgresValue::Integer(i) => write!(f, "{}", i),
            PostgresValue::BigInt(i) => write!(f, "{}", i),
            PostgresValue::Float(v) => write!(f, "{}", v),
            PostgresValue::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            PostgresValue::Numeric(d) => write!(f, "{}", d),
            PostgresValue::Null(_) => write!(f, "NULL"),
        }
    }
}

impl From<String> for PostgresValue {
    fn from(val: String) -> Self {
        PostgresValue::Text(val)
    }
}

impl From<&str> for PostgresValue {
    fn from(val: &str) -> Self {
        PostgresValue::Text(val.to_string())
    }
}

impl From<i32> for PostgresValue {
    fn from(val: i32) -> Self {
        PostgresValue::Integer(val)
    }
}

impl From<i64> for PostgresValue {
    fn from(val: i64) -> Self {
        PostgresValue::BigInt(val)
    }
}

impl From<f64> for PostgresValue {
    fn from(val: f64) -> Self {
        PostgresValue::Float(val)
    }
}

impl From<bool> for PostgresValue {
    fn from(val: bool) -> Self {
        PostgresValue::Boolean(val)
    }
}

impl From<Decimal> for PostgresValue {
    fn from(val: Decimal) -> Self {
        PostgresValue::Numeric(val)
    }
}

/// `None` becomes a NULL typed after `T`
impl<T> From<Option<T>> for PostgresValue
where
    T: Into<PostgresValue> + HasPgType,
{
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => PostgresValue::Null(T::PG_TYPE),
        }
    }
}
