//! Generic store implementations
//!
//! Every statement is assembled from the table's metadata plus fragments
//! from the query builders, and every value is bound positionally.

use super::core::GenericStore;
use crate::errors::StoreError;
use crate::query_builder::{
    build_where_clause, sql_for_insert, sql_for_partial_update, Criteria, FieldMap, SqlGenerator,
};
use crate::traits::TableMetadata;
use crate::traits::StoreObject;
use async_trait::async_trait;
use type_mapping::PostgresValue;

/// Bind a `PostgresValue` to a sqlx query with the matching Rust type
macro_rules! bind_pg_value {
    ($query:expr, $value:expr) => {
        match $value {
            PostgresValue::Text(s) => $query.bind(s),
            PostgresValue::Integer(i) => $query.bind(i),
            PostgresValue::BigInt(i) => $query.bind(i),
            PostgresValue::Float(f) => $query.bind(f),
            PostgresValue::Boolean(b) => $query.bind(b),
            PostgresValue::Numeric(d) => $query.bind(d),
            PostgresValue::Null(kind) => match kind {
                ::type_mapping::PgType::Text => $query.bind(Option::<String>::None),
                ::type_mapping::PgType::Integer => $query.bind(Option::<i32>::None),
                ::type_mapping::PgType::BigInt => $query.bind(Option::<i64>::None),
                ::type_mapping::PgType::Float => $query.bind(Option::<f64>::None),
                ::type_mapping::PgType::Boolean => $query.bind(Option::<bool>::None),
                ::type_mapping::PgType::Numeric => {
                    $query.bind(Option::<::rust_decimal::Decimal>::None)
                }
            },
        }
    };
}

pub(crate) use bind_pg_value;

#[async_trait]
impl<T> StoreObject for GenericStore<T>
where
    T: TableMetadata,
{
    type Model = T;
    type Id = T::Id;

    async fn create(&self, fields: FieldMap) -> Result<Self::Model, StoreError> {
        let insert = sql_for_insert(&fields, T::column_map())?;
        let sql = SqlGenerator::insert(
            T::table_name(),
            &insert.columns,
            &insert.placeholders,
            T::select_columns(),
        );
        tracing::debug!(table = T::table_name(), %sql, "create");

        let mut query = sqlx::query_as::<_, T>(&sql);
        for value in insert.values {
            query = bind_pg_value!(query, value);
        }

        query
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| {
                StoreError::from_write(T::table_name(), "create", e, |constraint| {
                    T::duplicate_label(&fields, constraint)
                })
            })
    }

    async fn get_by_id(&self, id: &Self::Id) -> Result<Option<Self::Model>, StoreError> {
        sqlx::query_as::<_, T>(&T::get_by_id_sql())
            .bind(id.clone())
            .fetch_optional(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "get_by_id", e))
    }

    async fn get(&self, id: &Self::Id) -> Result<Self::Model, StoreError> {
        self.get_by_id(id)
            .await?
            .ok_or_else(|| StoreError::NotFound(T::not_found_message(id)))
    }

    async fn list_all(&self) -> Result<Vec<Self::Model>, StoreError> {
        sqlx::query_as::<_, T>(&T::list_all_sql())
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "list_all", e))
    }

    async fn filter(&self, criteria: &Criteria) -> Result<Vec<Self::Model>, StoreError> {
        let (where_clause, values) = build_where_clause(criteria, T::filter_specs())?;
        let sql = SqlGenerator::select(
            T::select_columns(),
            T::table_name(),
            &where_clause,
            T::order_by(),
        );
        tracing::debug!(table = T::table_name(), %sql, params = values.len(), "filter");

        let mut query = sqlx::query_as::<_, T>(&sql);
        for value in values {
            query = bind_pg_value!(query, value);
        }

        query
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "filter", e))
    }

    async fn update(&self, id: &Self::Id, fields: FieldMap) -> Result<Self::Model, StoreError> {
        let update = sql_for_partial_update(&fields, T::column_map())?;
        let sql = SqlGenerator::update(
            T::table_name(),
            &update.set_cols,
            T::primary_key_field(),
            update.values.len(),
            T::select_columns(),
        );
        tracing::debug!(table = T::table_name(), %sql, "update");

        let mut query = sqlx::query_as::<_, T>(&sql);
        for value in update.values {
            query = bind_pg_value!(query, value);
        }

        query
            .bind(id.clone())
            .fetch_optional(&self.db_pool)
            .await
            .map_err(|e| {
                StoreError::from_write(T::table_name(), "update", e, |constraint| {
                    T::duplicate_label(&fields, constraint)
                })
            })?
            .ok_or_else(|| StoreError::NotFound(T::not_found_message(id)))
    }

    async fn delete(&self, id: &Self::Id) -> Result<(), StoreError> {
        let sql = SqlGenerator::delete(T::table_name(), T::primary_key_field());
        let result = sqlx::query(&sql)
            .bind(id.clone())
            .execute(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "delete", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(T::not_found_message(id)));
        }
        Ok(())
    }
}
