use super::core::StoreObject;
use crate::errors::StoreError;
use crate::query_builder::SqlGenerator;
use async_trait::async_trait;
use type_mapping::PostgresValue;

/// Equality filter over physical columns
#[derive(Clone, Debug, Default)]
pub struct StoreFilter {
    pub conditions: Vec<(String, PostgresValue)>, // (column, value)
}

impl StoreFilter {
    pub fn new() -> Self {
        Self {
            conditions: Vec::new(),
        }
    }

    pub fn add_condition(mut self, column: &str, value: impl Into<PostgresValue>) -> Self {
        self.conditions.push((column.to_string(), value.into()));
        self
    }

    /// WHERE fragment (without the keyword) and its values
    pub fn build_where_clause(&self) -> (String, Vec<PostgresValue>) {
        let clause =
            SqlGenerator::equality_clause(self.conditions.iter().map(|(column, _)| column.as_str()));
        let values = self
            .conditions
            .iter()
            .map(|(_, value)| value.clone())
            .collect();
        (clause, values)
    }
}

/// Trait for objects that support filtering
#[async_trait]
pub trait Filterable: StoreObject {
    /// List objects matching every equality condition
    async fn list_by_filter(&self, filter: &StoreFilter) -> Result<Vec<Self::Model>, StoreError>;
}
