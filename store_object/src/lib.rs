//! Store Object - Core database abstraction layer for Jobly
//!
//! This crate provides the SQL fragment builders (partial updates, inserts,
//! dynamic filters), the table metadata trait and a generic store that runs
//! the assembled statements against PostgreSQL.

pub mod errors;
pub mod generic_store;
pub mod prelude;
pub mod query_builder;
pub mod traits;

pub use errors::StoreError;
pub use generic_store::GenericStore;
pub use query_builder::{
    build_where_clause, sql_for_insert, sql_for_partial_update, ColumnMap, Criteria, FieldMap,
    FilterSpec, PartialUpdate, QueryOperator, ValueTransform,
};
pub use traits::{Filterable, StoreFilter, StoreObject, TableMetadata};
pub use type_mapping::PostgresValue;

use sqlx::PgPool;

pub type DbPool = PgPool;
