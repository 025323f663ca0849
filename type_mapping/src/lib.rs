//! Unified type mapping between Rust values and PostgreSQL bind parameters
//! This crate provides the value type shared by the jobly query builders and stores

pub mod serialize;
pub mod types;

pub use serialize::{from_json_value, parse_numeric_str};
pub use types::{HasPgType, PgType, PostgresValue};
