//! Generic store implementations
//!
//! Equality filtering used for child collections (e.g. a company's jobs).

use super::core::GenericStore;
use super::store_object::bind_pg_value;
use crate::errors::StoreError;
use crate::query_builder::SqlGenerator;
use crate::traits::TableMetadata;
use crate::traits::{Filterable, StoreFilter};
use async_trait::async_trait;
use type_mapping::PostgresValue;

#[async_trait]
impl<T> Filterable for GenericStore<T>
where
    T: TableMetadata,
{
    async fn list_by_filter(&self, filter: &StoreFilter) -> Result<Vec<Self::Model>, StoreError> {
        let (where_clause, values) = filter.build_where_clause();
        let sql = SqlGenerator::select(
            T::select_columns(),
            T::table_name(),
            &where_clause,
            T::order_by(),
        );

        let mut query = sqlx::query_as::<_, T>(&sql);
        for value in values {
            query = bind_pg_value!(query, value);
        }

        query
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "list_by_filter", e))
    }
}
