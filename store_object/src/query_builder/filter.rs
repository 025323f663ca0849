//! Declarative search filters
//!
//! Each entity describes its recognised search keys as a static list of
//! [`FilterSpec`]s. [`build_where_clause`] walks that list in order, so the
//! `$n` numbering follows the declared order and never the caller's key order.

use crate::errors::StoreError;
use crate::query_builder::sql_generation::Placeholders;
use serde_json::{Map, Value};
use type_mapping::{from_json_value, parse_numeric_str, PostgresValue};

/// Caller-supplied search criteria, keyed by filter name
pub type Criteria = Map<String, Value>;

/// Comparison operators available to filters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOperator {
    Eq,    // =
    Gt,    // >
    Gte,   // >=
    Lt,    // <
    Lte,   // <=
    ILike, // ILIKE (case insensitive)
}

impl QueryOperator {
    pub fn to_sql(&self) -> &'static str {
        match self {
            QueryOperator::Eq => "=",
            QueryOperator::Gt => ">",
            QueryOperator::Gte => ">=",
            QueryOperator::Lt => "<",
            QueryOperator::Lte => "<=",
            QueryOperator::ILike => "ILIKE",
        }
    }
}

/// How a criteria value becomes a bind value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTransform {
    /// JSON number or numeric string, bound as-is
    Number,
    /// String wrapped as `%value%` with LIKE wildcards escaped
    Contains,
    /// Boolean switch; when true the predicate compares against the fixed
    /// literal and consumes no placeholder
    Flag(&'static str),
}

/// One recognised search key
#[derive(Debug, Clone, Copy)]
pub struct FilterSpec {
    pub key: &'static str,
    pub column: &'static str,
    pub operator: QueryOperator,
    pub transform: ValueTransform,
}

impl FilterSpec {
    pub const fn new(
        key: &'static str,
        column: &'static str,
        operator: QueryOperator,
        transform: ValueTransform,
    ) -> Self {
        Self {
            key,
            column,
            operator,
            transform,
        }
    }

    /// `key` must be a number; compared with `operator` against `column`
    pub const fn number(key: &'static str, column: &'static str, operator: QueryOperator) -> Self {
        Self::new(key, column, operator, ValueTransform::Number)
    }

    /// Case-insensitive substring match of `key` against `column`
    pub const fn contains(key: &'static str, column: &'static str) -> Self {
        Self::new(key, column, QueryOperator::ILike, ValueTransform::Contains)
    }

    /// When `key` is true, adds `column <operator> literal`
    pub const fn flag(
        key: &'static str,
        column: &'static str,
        operator: QueryOperator,
        literal: &'static str,
    ) -> Self {
        Self::new(key, column, operator, ValueTransform::Flag(literal))
    }
}

/// Escape LIKE metacharacters and wrap the fragment in `%` wildcards
pub fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Build the WHERE predicate (without the `WHERE` keyword) and its values.
///
/// Keys absent from `criteria`, or present with `null`, contribute nothing.
/// Keys that no spec recognises are ignored. Returns an empty fragment and
/// no values when nothing applies.
pub fn build_where_clause(
    criteria: &Criteria,
    specs: &[FilterSpec],
) -> Result<(String, Vec<PostgresValue>), StoreError> {
    let mut placeholders = Placeholders::new();
    let mut clauses = Vec::new();
    let mut values = Vec::new();

    for spec in specs {
        let raw = match criteria.get(spec.key) {
            None | Some(Value::Null) => continue,
            Some(raw) => raw,
        };

        match spec.transform {
            ValueTransform::Number => {
                let value = numeric_value(spec.key, raw)?;
                clauses.push(format!(
                    "{} {} {}",
                    spec.column,
                    spec.operator.to_sql(),
                    placeholders.next_placeholder()
                ));
                values.push(value);
            }
            ValueTransform::Contains => {
                let fragment = raw.as_str().ok_or_else(|| {
                    StoreError::validation(format!("{} must be a string", spec.key))
                })?;
                if fragment.is_empty() {
                    continue;
                }
                clauses.push(format!(
                    "{} {} {}",
                    spec.column,
                    spec.operator.to_sql(),
                    placeholders.next_placeholder()
                ));
                values.push(PostgresValue::Text(contains_pattern(fragment)));
            }
            ValueTransform::Flag(literal) => {
                if flag_value(spec.key, raw)? {
                    clauses.push(format!(
                        "{} {} {}",
                        spec.column,
                        spec.operator.to_sql(),
                        literal
                    ));
                }
            }
        }
    }

    Ok((clauses.join(" AND "), values))
}

fn numeric_value(key: &str, raw: &Value) -> Result<PostgresValue, StoreError> {
    let parsed = match raw {
        Value::Number(_) => from_json_value(raw),
        Value::String(s) => parse_numeric_str(s),
        _ => None,
    };
    parsed.ok_or_else(|| StoreError::validation(format!("{} must be a number", key)))
}

fn flag_value(key: &str, raw: &Value) -> Result<bool, StoreError> {
    match raw {
        Value::Bool(b) => Ok(*b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(false),
        _ => Err(StoreError::validation(format!("{} must be true or false", key))),
    }
}
