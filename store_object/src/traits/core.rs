//! Trait definitions
//!
//! This module defines core traits for database operations.

use crate::errors::StoreError;
use crate::query_builder::{Criteria, FieldMap};
use async_trait::async_trait;
use serde::Serialize;
use std::fmt::Debug;

/// Trait that defines common database operations for all entities
#[async_trait]
pub trait StoreObject: Clone + Send + Sync + Debug {
    /// The model type that this object represents
    type Model: Clone + Send + Sync + Debug + Serialize;

    /// The ID type used for this object (i32, String, etc.)
    type Id: Clone + Send + Sync + Debug;

    /// Insert a row from a sparse field map and return it
    async fn create(&self, fields: FieldMap) -> Result<Self::Model, StoreError>;

    /// Get an object by its ID
    async fn get_by_id(&self, id: &Self::Id) -> Result<Option<Self::Model>, StoreError>;

    /// Get an object by its ID, failing with `NotFound` when absent
    async fn get(&self, id: &Self::Id) -> Result<Self::Model, StoreError>;

    /// List all objects of this type in the table's default order
    async fn list_all(&self) -> Result<Vec<Self::Model>, StoreError>;

    /// List objects matching search criteria in the table's default order
    async fn filter(&self, criteria: &Criteria) -> Result<Vec<Self::Model>, StoreError>;

    /// Apply a partial update and return the updated row
    async fn update(&self, id: &Self::Id, fields: FieldMap) -> Result<Self::Model, StoreError>;

    /// Delete an object by its ID, failing with `NotFound` when absent
    async fn delete(&self, id: &Self::Id) -> Result<(), StoreError>;
}
