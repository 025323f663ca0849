use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use store_object::query_builder::{FieldMap, FilterSpec, QueryOperator};
use store_object::TableMetadata;

use super::{nullable, require_handle, require_non_negative, require_not_null, require_text, Company};
use crate::errors::JoblyError;

/// Search keys accepted by `GET /jobs`
pub const JOB_FILTERS: &[FilterSpec] = &[
    FilterSpec::number("minSalary", "salary", QueryOperator::Gt),
    FilterSpec::flag("hasEquity", "equity", QueryOperator::Gt, "0"),
    FilterSpec::contains("title", "title"),
];

/// A job posting. `equity` is NUMERIC and serializes as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

impl TableMetadata for Job {
    type Id = i32;

    fn table_name() -> &'static str {
        "jobs"
    }

    fn entity_name() -> &'static str {
        "job"
    }

    fn primary_key_field() -> &'static str {
        "id"
    }

    fn select_columns() -> &'static str {
        "id, title, salary, equity, company_handle"
    }

    fn order_by() -> Option<&'static str> {
        Some("title")
    }

    fn filter_specs() -> &'static [FilterSpec] {
        JOB_FILTERS
    }

    fn not_found_message(id: &i32) -> String {
        format!("No job found with id of {id}")
    }
}

/// Job as listed under its company
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobSummary {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
}

impl From<Job> for JobSummary {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            title: job.title,
            salary: job.salary,
            equity: job.equity,
        }
    }
}

/// Job with its company, as returned by `GET /jobs/:id`
#[derive(Debug, Clone, Serialize)]
pub struct JobDetail {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company: Company,
}

impl JobDetail {
    pub fn new(job: Job, company: Company) -> Self {
        Self {
            id: job.id,
            title: job.title,
            salary: job.salary,
            equity: job.equity,
            company,
        }
    }
}

fn check_equity(equity: Option<Decimal>) -> Result<(), JoblyError> {
    match equity {
        Some(e) if e < Decimal::ZERO || e > Decimal::ONE => Err(JoblyError::bad_request(
            "equity must be between 0 and 1",
        )),
        _ => Ok(()),
    }
}

/// Body of `POST /jobs`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewJob {
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

impl NewJob {
    pub fn validate(&self) -> Result<(), JoblyError> {
        require_text("title", &self.title)?;
        require_non_negative("salary", self.salary)?;
        check_equity(self.equity)?;
        require_handle("company_handle", &self.company_handle)
    }

    pub fn into_field_map(self) -> FieldMap {
        FieldMap::new()
            .set("title", self.title)
            .set_opt("salary", self.salary)
            .set_opt("equity", self.equity)
            .set("company_handle", self.company_handle)
    }
}

/// Body of `PATCH /jobs/:id`. A job cannot move to another company.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobUpdate {
    #[serde(default, deserialize_with = "nullable")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub salary: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub equity: Option<Option<Decimal>>,
}

impl JobUpdate {
    pub fn validate(&self) -> Result<(), JoblyError> {
        require_not_null("title", &self.title)?;
        if let Some(Some(title)) = &self.title {
            require_text("title", title)?;
        }
        require_non_negative("salary", self.salary.flatten())?;
        check_equity(self.equity.flatten())
    }

    pub fn into_field_map(self) -> FieldMap {
        FieldMap::new()
            .set_opt("title", self.title)
            .set_opt("salary", self.salary)
            .set_opt("equity", self.equity)
    }
}
