//! Query builder utilities
//!
//! This module provides the parameterized SQL fragments used by the stores:
//! partial-update SET lists, INSERT column lists and declarative WHERE filters.

pub mod filter;
pub mod sql_generation;
pub mod update;


pub use filter::{
    build_where_clause, contains_pattern, Criteria, FilterSpec, QueryOperator, ValueTransform,
};
pub use sql_generation::{Placeholders, SqlGenerator};
pub use update::{
    physical_name, sql_for_insert, sql_for_partial_update, ColumnMap, FieldMap, InsertFragment,
    PartialUpdate,
};
