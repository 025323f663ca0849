//! # Jobly
//!
//! A REST backend for companies and the jobs they post, on PostgreSQL.
//!
//! Writes go through the partial-update builder in `store-object`, so a
//! PATCH only touches the columns it names. Searches go through the
//! declarative filter builder, which turns query-string criteria into a
//! parameterized WHERE clause.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jobly::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let jobly = Jobly::new(&config.database).await?;
//!
//!     let fields = FieldMap::new()
//!         .set("handle", "acme")
//!         .set("name", "Acme")
//!         .set("description", "Anvils")
//!         .set("numEmployees", 12);
//!     let company = jobly.companies().create(fields).await?;
//!     println!("Created company: {}", company.name);
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod models;
pub mod prelude;
pub mod server;

// Re-export the main public types for convenience
pub use self::core::Jobly;
pub use errors::JoblyError;

// Re-export centralized config
pub use config::{AppConfig, AuthConfig, DatabaseConfig, ServerConfig};

// Re-export internal crates used in the public API
pub use store_object;
pub use type_mapping;

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
