pub mod companies;
pub mod jobs;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Json, Path, Query};
use serde_json::Value;
use std::collections::HashMap;
use store_object::Criteria;

use crate::errors::JoblyError;

/// Unwrap a JSON body, reporting malformed or unexpected fields as 400
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, JoblyError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| JoblyError::bad_request(rejection.body_text()))
}

pub(crate) fn path_param<T>(param: Result<Path<T>, PathRejection>) -> Result<T, JoblyError> {
    param
        .map(|Path(value)| value)
        .map_err(|rejection| JoblyError::bad_request(rejection.body_text()))
}

/// Query-string pairs as search criteria; every value arrives as a string
pub(crate) fn criteria_from_query(
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<Criteria, JoblyError> {
    let Query(pairs) = query.map_err(|rejection| JoblyError::bad_request(rejection.body_text()))?;
    Ok(pairs
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect())
}
