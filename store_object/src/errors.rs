use thiserror::Error;

/// SQLSTATE for unique_violation
const UNIQUE_VIOLATION: &str = "23505";
/// SQLSTATE for foreign_key_violation
const FOREIGN_KEY_VIOLATION: &str = "23503";
/// SQLSTATE for check_violation
const CHECK_VIOLATION: &str = "23514";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Duplicate {0}")]
    Duplicate(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Database error on {table} during {operation}: {source}")]
    Database {
        table: String,
        operation: String,
        #[source]
        source: sqlx::Error,
    },
}

impl StoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Wrap a sqlx error raised while running `operation` against `table`
    pub fn database_operation(table: &str, operation: &str, source: sqlx::Error) -> Self {
        Self::Database {
            table: table.to_string(),
            operation: operation.to_string(),
            source,
        }
    }

    /// Like `database_operation`, but classifies constraint violations.
    ///
    /// `duplicate_label` receives the name of the violated unique constraint
    /// and returns the record description for the duplicate-key message
    /// (e.g. `company: c1`).
    pub fn from_write<F>(table: &str, operation: &str, source: sqlx::Error, duplicate_label: F) -> Self
    where
        F: FnOnce(Option<&str>) -> String,
    {
        let code = source
            .as_database_error()
            .and_then(|db| db.code())
            .map(|code| code.into_owned());

        match code.as_deref() {
            Some(UNIQUE_VIOLATION) => {
                let constraint = source.as_database_error().and_then(|db| db.constraint());
                Self::Duplicate(duplicate_label(constraint))
            }
            Some(FOREIGN_KEY_VIOLATION) | Some(CHECK_VIOLATION) => {
                let detail = source
                    .as_database_error()
                    .map(|db| db.message().to_string())
                    .unwrap_or_default();
                Self::Constraint(detail)
            }
            _ => Self::database_operation(table, operation, source),
        }
    }

    /// Errors caused by the caller's input rather than the store
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Database { .. })
    }
}
