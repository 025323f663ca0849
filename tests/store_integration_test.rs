//! Integration tests for the company and job stores
//!
//! Run against a real PostgreSQL with
//! `DATABASE_URL=postgres://... cargo test -- --ignored`.
//! The tests share two tables, so they take a lock and reset the schema.

use jobly::prelude::*;
use rust_decimal::Decimal;
use serde_json::json;
use std::str::FromStr;
use tokio::sync::{Mutex, MutexGuard};

static DB_LOCK: Mutex<()> = Mutex::const_new(());

const SCHEMA: &str = include_str!("../jobly-schema.sql");

async fn setup() -> (MutexGuard<'static, ()>, Jobly) {
    let guard = DB_LOCK.lock().await;
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for integration tests");

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database");
    cleanup_tables(&pool).await;
    sqlx::raw_sql(SCHEMA)
        .execute(&pool)
        .await
        .expect("Failed to create tables");

    (guard, Jobly::from_pool(pool))
}

async fn cleanup_tables(pool: &PgPool) {
    let _ = sqlx::query("DROP TABLE IF EXISTS jobs CASCADE")
        .execute(pool)
        .await;
    let _ = sqlx::query("DROP TABLE IF EXISTS companies CASCADE")
        .execute(pool)
        .await;
}

fn company(handle: &str, name: &str, employees: i32) -> FieldMap {
    FieldMap::new()
        .set("handle", handle)
        .set("name", name)
        .set("description", format!("Desc {name}"))
        .set("numEmployees", employees)
        .set("logoUrl", format!("http://{handle}.img"))
}

fn job(title: &str, salary: i32, equity: &str, company: &str) -> FieldMap {
    FieldMap::new()
        .set("title", title)
        .set("salary", salary)
        .set("equity", Decimal::from_str(equity).expect("valid decimal"))
        .set("company_handle", company)
}

async fn seed(jobly: &Jobly) {
    for (handle, name, employees) in [("c1", "C1", 1), ("c2", "C2", 2), ("c3", "C3", 3)] {
        jobly
            .companies()
            .create(company(handle, name, employees))
            .await
            .unwrap();
    }
    jobly.jobs().create(job("j1", 100, "0.1", "c1")).await.unwrap();
    jobly.jobs().create(job("j2", 200, "0.2", "c1")).await.unwrap();
    jobly.jobs().create(job("j3", 300, "0", "c2")).await.unwrap();
}

fn handles(companies: &[Company]) -> Vec<&str> {
    companies.iter().map(|c| c.handle.as_str()).collect()
}

// ========================================
// Companies
// ========================================

#[tokio::test]
#[ignore]
async fn test_company_create_and_duplicate() {
    let (_guard, jobly) = setup().await;
    seed(&jobly).await;

    let fetched = jobly.companies().get(&"c1".to_string()).await.unwrap();
    assert_eq!(fetched.num_employees, Some(1));
    assert_eq!(fetched.logo_url.as_deref(), Some("http://c1.img"));

    let err = jobly
        .companies()
        .create(company("c1", "Other", 5))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Duplicate company: c1");
}

#[tokio::test]
#[ignore]
async fn test_company_duplicate_name() {
    let (_guard, jobly) = setup().await;
    seed(&jobly).await;

    let err = jobly
        .companies()
        .create(company("c9", "C1", 9))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Duplicate(_)));
    assert_eq!(err.to_string(), "Duplicate company name: C1");

    let err = jobly
        .companies()
        .update(&"c2".to_string(), FieldMap::new().set("name", "C3"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Duplicate company name: C3");
}

#[tokio::test]
#[ignore]
async fn test_company_uppercase_handle_is_a_constraint_error() {
    let (_guard, jobly) = setup().await;

    let err = jobly
        .companies()
        .create(company("Acme", "Acme", 1))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Constraint(_)));
    assert!(err.is_client_error());
}

#[tokio::test]
#[ignore]
async fn test_company_list_and_filter() {
    let (_guard, jobly) = setup().await;
    seed(&jobly).await;

    let all = jobly.companies().list_all().await.unwrap();
    assert_eq!(handles(&all), vec!["c1", "c2", "c3"]);

    let criteria = json!({"minEmployees": 1, "maxEmployees": 3});
    let mid = jobly
        .companies()
        .filter(criteria.as_object().unwrap())
        .await
        .unwrap();
    assert_eq!(handles(&mid), vec!["c2"]);

    let criteria = json!({"nameLike": "c3"});
    let named = jobly
        .companies()
        .filter(criteria.as_object().unwrap())
        .await
        .unwrap();
    assert_eq!(handles(&named), vec!["c3"]);

    let criteria = json!({"nameLike": "%"});
    let literal = jobly
        .companies()
        .filter(criteria.as_object().unwrap())
        .await
        .unwrap();
    assert!(literal.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_company_partial_update() {
    let (_guard, jobly) = setup().await;
    seed(&jobly).await;

    let fields = FieldMap::new().set("numEmployees", 50);
    let updated = jobly
        .companies()
        .update(&"c1".to_string(), fields)
        .await
        .unwrap();
    assert_eq!(updated.num_employees, Some(50));
    assert_eq!(updated.name, "C1");
    assert_eq!(updated.description, "Desc C1");

    let err = jobly
        .companies()
        .update(&"nope".to_string(), FieldMap::new().set("name", "x"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(ref msg) if msg == "No company: nope"));
}

#[tokio::test]
#[ignore]
async fn test_update_bodies_clear_nullable_columns() {
    let (_guard, jobly) = setup().await;
    seed(&jobly).await;

    let body: CompanyUpdate = serde_json::from_value(json!({"logoUrl": null})).unwrap();
    body.validate().unwrap();
    let updated = jobly
        .companies()
        .update(&"c1".to_string(), body.into_field_map())
        .await
        .unwrap();
    assert_eq!(updated.logo_url, None);
    assert_eq!(updated.num_employees, Some(1));

    let body: CompanyUpdate = serde_json::from_value(json!({"numEmployees": null})).unwrap();
    let updated = jobly
        .companies()
        .update(&"c1".to_string(), body.into_field_map())
        .await
        .unwrap();
    assert_eq!(updated.num_employees, None);

    let of_c1 = jobly
        .jobs()
        .list_by_filter(&StoreFilter::new().add_condition("company_handle", "c1"))
        .await
        .unwrap();
    let body: JobUpdate = serde_json::from_value(json!({"salary": null, "equity": null})).unwrap();
    body.validate().unwrap();
    let updated = jobly
        .jobs()
        .update(&of_c1[0].id, body.into_field_map())
        .await
        .unwrap();
    assert_eq!(updated.salary, None);
    assert_eq!(updated.equity, None);
    assert_eq!(updated.title, of_c1[0].title);
}

#[tokio::test]
#[ignore]
async fn test_company_delete_cascades() {
    let (_guard, jobly) = setup().await;
    seed(&jobly).await;

    jobly.companies().delete(&"c1".to_string()).await.unwrap();
    let err = jobly
        .companies()
        .delete(&"c1".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));

    let remaining = jobly.jobs().list_all().await.unwrap();
    assert_eq!(remaining.len(), 1);
}

// ========================================
// Jobs
// ========================================

#[tokio::test]
#[ignore]
async fn test_job_filters() {
    let (_guard, jobly) = setup().await;
    seed(&jobly).await;

    let criteria = json!({"hasEquity": true});
    let with_equity = jobly
        .jobs()
        .filter(criteria.as_object().unwrap())
        .await
        .unwrap();
    assert_eq!(with_equity.len(), 2);

    let criteria = json!({"minSalary": "150", "title": "J"});
    let paid = jobly
        .jobs()
        .filter(criteria.as_object().unwrap())
        .await
        .unwrap();
    let titles: Vec<&str> = paid.iter().map(|j| j.title.as_str()).collect();
    assert_eq!(titles, vec!["j2", "j3"]);
}

#[tokio::test]
#[ignore]
async fn test_job_update_and_children() {
    let (_guard, jobly) = setup().await;
    seed(&jobly).await;

    let of_c1 = jobly
        .jobs()
        .list_by_filter(&StoreFilter::new().add_condition("company_handle", "c1"))
        .await
        .unwrap();
    assert_eq!(of_c1.len(), 2);

    let id = of_c1[0].id;
    let fields = FieldMap::new().set("equity", Decimal::from_str("0.75").unwrap());
    let updated = jobly.jobs().update(&id, fields).await.unwrap();
    assert_eq!(updated.equity, Some(Decimal::from_str("0.75").unwrap()));
    assert_eq!(updated.title, of_c1[0].title);

    let err = jobly.jobs().get(&0).await.unwrap_err();
    assert_eq!(err.to_string(), "No job found with id of 0");
}

#[tokio::test]
#[ignore]
async fn test_job_for_unknown_company() {
    let (_guard, jobly) = setup().await;
    seed(&jobly).await;

    let err = jobly
        .jobs()
        .create(job("orphan", 1, "0", "nope"))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Constraint(_)));
}

#[tokio::test]
#[ignore]
async fn test_filter_values_are_never_sql() {
    let (_guard, jobly) = setup().await;
    seed(&jobly).await;

    let criteria = json!({"nameLike": "'; DROP TABLE companies; --"});
    let found = jobly
        .companies()
        .filter(criteria.as_object().unwrap())
        .await
        .unwrap();
    assert!(found.is_empty());
    assert_eq!(jobly.companies().list_all().await.unwrap().len(), 3);
}
