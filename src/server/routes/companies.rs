//! `/companies` handlers

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use serde_json::{json, Value};
use std::collections::HashMap;
use store_object::{Criteria, Filterable, StoreFilter, StoreObject};
use type_mapping::{parse_numeric_str, PostgresValue};

use super::{criteria_from_query, json_body, path_param};
use crate::errors::JoblyError;
use crate::models::{CompanyDetail, CompanyUpdate, NewCompany};
use crate::server::state::AppState;

/// POST /companies { company } => 201 { company }
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewCompany>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), JoblyError> {
    let body = json_body(payload)?;
    body.validate()?;

    let company = state.jobly.companies().create(body.into_field_map()).await?;
    tracing::info!(handle = %company.handle, "company created");
    Ok((StatusCode::CREATED, Json(json!({ "company": company }))))
}

/// GET /companies?minEmployees=&maxEmployees=&nameLike= => { companies: [...] }
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<Json<Value>, JoblyError> {
    let criteria = criteria_from_query(query)?;
    crate::debug_log!("company search criteria: {:?}", criteria);
    check_employee_range(&criteria)?;

    let companies = if criteria.is_empty() {
        state.jobly.companies().list_all().await?
    } else {
        state.jobly.companies().filter(&criteria).await?
    };
    Ok(Json(json!({ "companies": companies })))
}

/// GET /companies/:handle => { company } with its jobs
pub async fn get(
    State(state): State<AppState>,
    handle: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, JoblyError> {
    let handle = path_param(handle)?;
    let company = state.jobly.companies().get(&handle).await?;
    let jobs = state
        .jobly
        .jobs()
        .list_by_filter(&StoreFilter::new().add_condition("company_handle", handle))
        .await?;

    let detail = CompanyDetail {
        company,
        jobs: jobs.into_iter().map(Into::into).collect(),
    };
    Ok(Json(json!({ "company": detail })))
}

/// PATCH /companies/:handle { fld1, ... } => { company }
pub async fn update(
    State(state): State<AppState>,
    handle: Result<Path<String>, PathRejection>,
    payload: Result<Json<CompanyUpdate>, JsonRejection>,
) -> Result<Json<Value>, JoblyError> {
    let handle = path_param(handle)?;
    let body = json_body(payload)?;
    body.validate()?;

    let company = state
        .jobly
        .companies()
        .update(&handle, body.into_field_map())
        .await?;
    Ok(Json(json!({ "company": company })))
}

/// DELETE /companies/:handle => { deleted: handle }
pub async fn delete(
    State(state): State<AppState>,
    handle: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, JoblyError> {
    let handle = path_param(handle)?;
    state.jobly.companies().delete(&handle).await?;
    tracing::info!(%handle, "company deleted");
    Ok(Json(json!({ "deleted": handle })))
}

fn as_number(value: &PostgresValue) -> Option<f64> {
    match value {
        PostgresValue::Integer(i) => Some(f64::from(*i)),
        PostgresValue::BigInt(i) => Some(*i as f64),
        PostgresValue::Float(f) => Some(*f),
        _ => None,
    }
}

/// minEmployees may not exceed maxEmployees. Unparseable bounds are left
/// for the filter builder to reject.
fn check_employee_range(criteria: &Criteria) -> Result<(), JoblyError> {
    let bound = |key: &str| {
        criteria
            .get(key)
            .and_then(Value::as_str)
            .and_then(parse_numeric_str)
            .as_ref()
            .and_then(as_number)
    };

    if let (Some(min), Some(max)) = (bound("minEmployees"), bound("maxEmployees")) {
        if min > max {
            return Err(JoblyError::bad_request(
                "minEmployees cannot be greater than maxEmployees",
            ));
        }
    }
    Ok(())
}
