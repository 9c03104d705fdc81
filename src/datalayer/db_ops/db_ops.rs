use sqlx::postgres::{PgPool, PgPoolOptions};
use std::sync::Arc;
use tracing::{error, info};

use crate::datalayer::db_ops::config::DbConfig;
use crate::errors::errors::ServiceResult;

/// Connection pool manager for the relational store
#[derive(Clone)]
pub struct DbManager {
    pool: Arc<PgPool>,
}

impl DbManager {
    /// Build the connection pool from the given configuration
    pub async fn new(config: DbConfig) -> ServiceResult<Self> {
        info!("Initializing database connection pool...");

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connection_timeout)
            .idle_timeout(config.idle_timeout)
            .max_lifetime(config.max_lifetime)
            .connect(&config.database_url)
            .await
            .map_err(|e| {
                error!("Failed to create database pool: {}", e);
                e
            })?;

        info!("Database connection pool created successfully");

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Health check - verifies database connectivity
    /// This is idempotent and can be called repeatedly
    pub async fn health_check(&self) -> ServiceResult<DatabaseHealth> {
        let start = std::time::Instant::now();

        // Simple ping query
        sqlx::query("SELECT 1").execute(&*self.pool).await?;

        let latency = start.elapsed();

        Ok(DatabaseHealth {
            is_healthy: true,
            latency_ms: latency.as_millis() as u64,
            pool_size: self.pool.size(),
            idle_connections: self.pool.num_idle(),
        })
    }

    /// Graceful shutdown - closes all connections in the pool
    pub async fn shutdown(&self) {
        info!("Shutting down database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }

    /// Test database connection and log pool statistics
    pub async fn test_connection(&self) -> ServiceResult<()> {
        info!("Testing database connection...");

        let health = self.health_check().await?;

        info!("Database connection test successful");
        info!(
            "Pool statistics: size={}, idle={}, latency={}ms",
            health.pool_size, health.idle_connections, health.latency_ms
        );

        Ok(())
    }
}

/// Database health status
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DatabaseHealth {
    pub is_healthy: bool,
    pub latency_ms: u64,
    pub pool_size: u32,
    pub idle_connections: usize,
}

/// Initialize the database connection at application startup. Callers
/// resolve a [`DbConfig`] first (usually [`DbConfig::from_env`]) and hand it
/// in, so tests and tools can point the pool elsewhere.
pub async fn initialize_database(config: DbConfig) -> ServiceResult<DbManager> {
    info!("=== Database Initialization Started ===");

    let db_manager = DbManager::new(config).await?;

    // Fail fast if the store is unreachable
    db_manager.test_connection().await?;

    info!("=== Database Initialization Completed ===");

    Ok(db_manager)
}
