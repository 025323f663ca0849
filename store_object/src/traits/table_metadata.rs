//! Trait definitions
//!
//! Static description of an entity table: names, key, projection, ordering
//! and the logical-to-physical naming used by the fragment builders.

use crate::query_builder::{ColumnMap, FieldMap, FilterSpec};
use serde::Serialize;
use std::fmt::{Debug, Display};
use type_mapping::PostgresValue;

/// Text values unquoted, everything else as its literal
fn message_value(value: &PostgresValue) -> String {
    match value {
        PostgresValue::Text(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Metadata about database table structure
///
/// Implemented by hand per model:
/// ```ignore
/// impl TableMetadata for Company {
///     type Id = String;
///     fn table_name() -> &'static str { "companies" }
///     fn entity_name() -> &'static str { "company" }
///     fn primary_key_field() -> &'static str { "handle" }
///     fn select_columns() -> &'static str { "handle, name, num_employees, logo_url" }
///     fn unique_constraints() -> &'static [(&'static str, &'static str)] {
///         &[("companies_name_key", "name")]
///     }
/// }
/// ```
pub trait TableMetadata:
    Clone + Send + Sync + Debug + Serialize + Unpin + for<'r> sqlx::FromRow<'r, sqlx::postgres::PgRow>
{
    /// The type used for the primary key
    type Id: Clone
        + Send
        + Sync
        + Debug
        + Display
        + 'static
        + for<'q> sqlx::Encode<'q, sqlx::Postgres>
        + sqlx::Type<sqlx::Postgres>;

    /// The table name in the database
    fn table_name() -> &'static str;

    /// Singular label used in messages, e.g. `company`
    fn entity_name() -> &'static str;

    /// Get the primary key column name
    fn primary_key_field() -> &'static str;

    /// Projection used by every SELECT and RETURNING clause
    fn select_columns() -> &'static str {
        "*"
    }

    /// ORDER BY expression for list queries
    fn order_by() -> Option<&'static str> {
        None
    }

    /// Logical field names whose column differs
    fn column_map() -> &'static ColumnMap {
        &[]
    }

    /// Search keys recognised by `StoreObject::filter`
    fn filter_specs() -> &'static [FilterSpec] {
        &[]
    }

    /// Unique constraints other than the primary key, as
    /// `(constraint name, logical field)`
    fn unique_constraints() -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// `SELECT <columns> FROM <table> WHERE <pk> = $1`
    fn get_by_id_sql() -> String {
        crate::query_builder::SqlGenerator::select(
            Self::select_columns(),
            Self::table_name(),
            &format!("{} = $1", Self::primary_key_field()),
            None,
        )
    }

    /// `SELECT <columns> FROM <table> ORDER BY <order>`
    fn list_all_sql() -> String {
        crate::query_builder::SqlGenerator::select(
            Self::select_columns(),
            Self::table_name(),
            "",
            Self::order_by(),
        )
    }

    /// Record description for a unique violation on `constraint`.
    ///
    /// `company: c1` for the primary key, `company name: C1` for a listed
    /// unique constraint.
    fn duplicate_label(fields: &FieldMap, constraint: Option<&str>) -> String {
        let field = constraint
            .and_then(|name| {
                Self::unique_constraints()
                    .iter()
                    .find(|(known, _)| *known == name)
            })
            .map(|(_, field)| *field);

        match field {
            Some(field) => match fields.get(field) {
                Some(value) => format!("{} {}: {}", Self::entity_name(), field, message_value(value)),
                None => format!("{} {}", Self::entity_name(), field),
            },
            None => match fields.get(Self::primary_key_field()) {
                Some(value) => format!("{}: {}", Self::entity_name(), message_value(value)),
                None => Self::entity_name().to_string(),
            },
        }
    }

    /// Message used when a lookup by id finds nothing
    fn not_found_message(id: &Self::Id) -> String {
        format!("No {}: {}", Self::entity_name(), id)
    }
}
