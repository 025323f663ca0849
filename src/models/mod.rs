//! Company and Job models
//!
//! Each model carries its table metadata (column map, filter specs,
//! ordering) and the request bodies that feed the builders.

pub mod company;
pub mod job;

pub use company::{Company, CompanyDetail, CompanyUpdate, NewCompany};
pub use job::{Job, JobDetail, JobSummary, JobUpdate, NewJob};

use crate::errors::JoblyError;
use serde::{Deserialize, Deserializer};

/// Longest accepted company handle
pub const MAX_HANDLE_LEN: usize = 25;

/// Reject empty (or whitespace-only) strings
pub(crate) fn require_text(field: &str, value: &str) -> Result<(), JoblyError> {
    if value.trim().is_empty() {
        return Err(JoblyError::bad_request(format!("{field} must not be empty")));
    }
    Ok(())
}

pub(crate) fn require_handle(field: &str, value: &str) -> Result<(), JoblyError> {
    require_text(field, value)?;
    if value.chars().count() > MAX_HANDLE_LEN {
        return Err(JoblyError::bad_request(format!(
            "{field} must be at most {MAX_HANDLE_LEN} characters"
        )));
    }
    if value != value.to_lowercase() {
        return Err(JoblyError::bad_request(format!("{field} must be lowercase")));
    }
    Ok(())
}

/// Deserialize a present field as `Some`, keeping an explicit `null` as
/// `Some(None)`. Pair with `#[serde(default)]` so an absent field is `None`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Reject an explicit `null` for a NOT NULL column
pub(crate) fn require_not_null<T>(field: &str, value: &Option<Option<T>>) -> Result<(), JoblyError> {
    if matches!(value, Some(None)) {
        return Err(JoblyError::bad_request(format!("{field} cannot be null")));
    }
    Ok(())
}

pub(crate) fn require_non_negative(field: &str, value: Option<i32>) -> Result<(), JoblyError> {
    match value {
        Some(v) if v < 0 => Err(JoblyError::bad_request(format!(
            "{field} must be greater than or equal to 0"
        ))),
        _ => Ok(()),
    }
}
