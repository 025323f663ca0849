//! Convenience re-exports for common Jobly usage
//!
//! ```rust
//! use jobly::prelude::*;
//! ```

// Core Jobly components
pub use crate::core::Jobly;
pub use crate::errors::JoblyError;
pub use crate::models::{Company, CompanyUpdate, Job, JobUpdate, NewCompany, NewJob};

// Re-export centralized config
pub use config::{AppConfig, AuthConfig, DatabaseConfig, ServerConfig};

// Re-export commonly used store-object types for convenience
pub use store_object::prelude::*;

// Common external dependencies
pub use anyhow;
pub use async_trait;
pub use sqlx;
pub use tokio;
