use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use store_object::query_builder::{ColumnMap, FieldMap, FilterSpec, QueryOperator};
use store_object::TableMetadata;

use super::{nullable, require_handle, require_non_negative, require_not_null, require_text, JobSummary};
use crate::errors::JoblyError;

/// Logical field names whose column differs
pub const COMPANY_COLUMNS: &ColumnMap = &[("numEmployees", "num_employees"), ("logoUrl", "logo_url")];

/// Search keys accepted by `GET /companies`
pub const COMPANY_FILTERS: &[FilterSpec] = &[
    FilterSpec::number("minEmployees", "num_employees", QueryOperator::Gt),
    FilterSpec::number("maxEmployees", "num_employees", QueryOperator::Lt),
    FilterSpec::contains("nameLike", "name"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

impl TableMetadata for Company {
    type Id = String;

    fn table_name() -> &'static str {
        "companies"
    }

    fn entity_name() -> &'static str {
        "company"
    }

    fn primary_key_field() -> &'static str {
        "handle"
    }

    fn select_columns() -> &'static str {
        "handle, name, description, num_employees, logo_url"
    }

    fn order_by() -> Option<&'static str> {
        Some("name")
    }

    fn column_map() -> &'static ColumnMap {
        COMPANY_COLUMNS
    }

    fn filter_specs() -> &'static [FilterSpec] {
        COMPANY_FILTERS
    }

    fn unique_constraints() -> &'static [(&'static str, &'static str)] {
        &[("companies_name_key", "name")]
    }
}

/// Company with its jobs, as returned by `GET /companies/:handle`
#[derive(Debug, Clone, Serialize)]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,
    pub jobs: Vec<JobSummary>,
}

/// Body of `POST /companies`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewCompany {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

impl NewCompany {
    pub fn validate(&self) -> Result<(), JoblyError> {
        require_handle("handle", &self.handle)?;
        require_text("name", &self.name)?;
        require_non_negative("numEmployees", self.num_employees)?;
        if let Some(url) = &self.logo_url {
            require_text("logoUrl", url)?;
        }
        Ok(())
    }

    /// Absent optional fields are left to the column default
    pub fn into_field_map(self) -> FieldMap {
        FieldMap::new()
            .set("handle", self.handle)
            .set("name", self.name)
            .set("description", self.description)
            .set_opt("numEmployees", self.num_employees)
            .set_opt("logoUrl", self.logo_url)
    }
}

/// Body of `PATCH /companies/:handle`. The handle cannot be changed.
///
/// Each field is absent (`None`), cleared (`Some(None)`) or set.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyUpdate {
    #[serde(default, deserialize_with = "nullable")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub num_employees: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub logo_url: Option<Option<String>>,
}

impl CompanyUpdate {
    pub fn validate(&self) -> Result<(), JoblyError> {
        require_not_null("name", &self.name)?;
        require_not_null("description", &self.description)?;
        if let Some(Some(name)) = &self.name {
            require_text("name", name)?;
        }
        require_non_negative("numEmployees", self.num_employees.flatten())?;
        if let Some(Some(url)) = &self.logo_url {
            require_text("logoUrl", url)?;
        }
        Ok(())
    }

    /// Only the fields present in the body
    pub fn into_field_map(self) -> FieldMap {
        FieldMap::new()
            .set_opt("name", self.name)
            .set_opt("description", self.description)
            .set_opt("numEmployees", self.num_employees)
            .set_opt("logoUrl", self.logo_url)
    }
}
