//! PostgreSQL connection pool for the service-role client.

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use thiserror::Error;

use crate::config::{mask_database_url, DatabaseConfig};

/// Errors that can occur with the PostgreSQL pool.
#[derive(Debug, Error)]
pub enum PostgresPoolError {
    #[error("SQLx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Database URL is not configured")]
    MissingUrl,
}

/// PostgreSQL connection pool.
///
/// Holds the privileged connection; only the masked URL ever reaches logs.
#[derive(Clone)]
pub struct PostgresPool {
    /// The underlying connection pool
    pool: PgPool,

    /// Database URL with the password masked
    masked_url: String,
}

impl PostgresPool {
    /// Create a new PostgreSQL pool from configuration.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, PostgresPoolError> {
        let url = config.url.as_deref().ok_or(PostgresPoolError::MissingUrl)?;

        let pool = PgPoolOptions::new()
            .max_connections(config.pool_size)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds as u64))
            .connect(url)
            .await?;

        let masked_url = mask_database_url(url);

        tracing::info!(
            pool_size = config.pool_size,
            url = %masked_url,
            "PostgreSQL connection pool created"
        );

        Ok(Self { pool, masked_url })
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the database URL (masked for logging).
    pub fn database_url_masked(&self) -> &str {
        &self.masked_url
    }

    /// Close the pool gracefully.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("PostgreSQL connection pool closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_url_is_rejected() {
        let config = DatabaseConfig::default();
        let result = PostgresPool::new(&config).await;
        assert!(matches!(result, Err(PostgresPoolError::MissingUrl)));
    }

    #[test]
    fn test_error_types() {
        let err = PostgresPoolError::MissingUrl;
        assert!(format!("{}", err).contains("not configured"));
    }
}
