//! `/jobs` handlers

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use serde_json::{json, Value};
use std::collections::HashMap;
use store_object::StoreObject;

use super::{criteria_from_query, json_body, path_param};
use crate::errors::JoblyError;
use crate::models::{JobDetail, JobUpdate, NewJob};
use crate::server::state::AppState;

/// POST /jobs { job } => 201 { job }
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewJob>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), JoblyError> {
    let body = json_body(payload)?;
    body.validate()?;

    let job = state.jobly.jobs().create(body.into_field_map()).await?;
    tracing::info!(id = job.id, company = %job.company_handle, "job created");
    Ok((StatusCode::CREATED, Json(json!({ "job": job }))))
}

/// GET /jobs?minSalary=&hasEquity=&title= => { jobs: [...] }
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<Json<Value>, JoblyError> {
    let criteria = criteria_from_query(query)?;
    crate::debug_log!("job search criteria: {:?}", criteria);
    let jobs = if criteria.is_empty() {
        state.jobly.jobs().list_all().await?
    } else {
        state.jobly.jobs().filter(&criteria).await?
    };
    Ok(Json(json!({ "jobs": jobs })))
}

/// GET /jobs/:id => { job } with its company
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Value>, JoblyError> {
    let id = path_param(id)?;
    let job = state.jobly.jobs().get(&id).await?;
    let company = state.jobly.companies().get(&job.company_handle).await?;
    Ok(Json(json!({ "job": JobDetail::new(job, company) })))
}

/// PATCH /jobs/:id { fld1, ... } => { job }
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<JobUpdate>, JsonRejection>,
) -> Result<Json<Value>, JoblyError> {
    let id = path_param(id)?;
    let body = json_body(payload)?;
    body.validate()?;

    let job = state.jobly.jobs().update(&id, body.into_field_map()).await?;
    Ok(Json(json!({ "job": job })))
}

/// DELETE /jobs/:id => { deleted: id }
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<Value>, JoblyError> {
    let id = path_param(id)?;
    state.jobly.jobs().delete(&id).await?;
    tracing::info!(id, "job deleted");
    Ok(Json(json!({ "deleted": id })))
}
