//! Traits for database operations
//!
//! This module contains the traits that describe an entity table and the
//! operations the generic store offers over it.

pub mod core;
pub mod filterable;
pub mod table_metadata;

// Re-export all public items for convenience
pub use self::core::StoreObject;
pub use filterable::{Filterable, StoreFilter};
pub use table_metadata::TableMetadata;
