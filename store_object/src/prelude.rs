//! Convenience re-exports for common store-object usage

// Core traits
pub use crate::traits::{Filterable, StoreFilter, StoreObject, TableMetadata};

// Error types
pub use crate::errors::StoreError;

// Core store functionality
pub use crate::generic_store::GenericStore;

// Query building
pub use crate::query_builder::{
    ColumnMap, Criteria, FieldMap, FilterSpec, QueryOperator, ValueTransform,
};

// Bind values
pub use type_mapping::PostgresValue;

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use sqlx::{FromRow, PgPool};
