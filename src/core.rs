//! Core Jobly functionality
//!
//! This module contains the main Jobly struct, which owns the connection
//! pool and the typed stores for each entity.

use sqlx::PgPool;
use std::time::Duration;
use store_object::GenericStore;

use crate::errors::JoblyError;
use crate::models::{Company, Job};
use config::DatabaseConfig;

/// Main Jobly coordinator that manages the database connection and entity stores
#[derive(Debug, Clone)]
pub struct Jobly {
    pool: PgPool,
    companies: GenericStore<Company>,
    jobs: GenericStore<Job>,
}

impl Jobly {
    /// Create new Jobly with database connection
    pub async fn new(config: &DatabaseConfig) -> Result<Self, JoblyError> {
        let pool = Self::pool_options(config)
            .connect(&config.connection_string())
            .await?;
        tracing::info!(host = %config.host, database = %config.database, "connected to database");
        Ok(Self::from_pool(pool))
    }

    /// Create Jobly whose pool connects on first use
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self, JoblyError> {
        let pool = Self::pool_options(config).connect_lazy(&config.connection_string())?;
        Ok(Self::from_pool(pool))
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            companies: GenericStore::new(pool.clone()),
            jobs: GenericStore::new(pool.clone()),
            pool,
        }
    }

    fn pool_options(config: &DatabaseConfig) -> sqlx::postgres::PgPoolOptions {
        let mut pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }
        pool_options
    }

    /// Get database pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn companies(&self) -> &GenericStore<Company> {
        &self.companies
    }

    pub fn jobs(&self) -> &GenericStore<Job> {
        &self.jobs
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), JoblyError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
