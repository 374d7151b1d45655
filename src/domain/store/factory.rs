//! Store backend factory

use std::sync::Arc;

use crate::config::StoreConfig;
use crate::error::AppError;
use crate::postgres::PostgresPool;

use super::backend::PlatformStore;
use super::memory_backend::MemoryStore;
use super::postgres_backend::PostgresStore;

/// Create a store backend based on configuration.
///
/// - `"postgres"` (default): a `PostgresStore` on the given pool; a pool is required
/// - `"memory"`: an empty `MemoryStore`
pub fn create_store(
    settings: &StoreConfig,
    postgres_pool: Option<&PostgresPool>,
) -> Result<Arc<dyn PlatformStore>, AppError> {
    match settings.backend.as_str() {
        "postgres" => {
            let pool = postgres_pool.ok_or(AppError::MissingSetting("database.url"))?;
            tracing::info!(
                backend = "postgres",
                url = %pool.database_url_masked(),
                "Creating PostgreSQL store"
            );
            Ok(Arc::new(PostgresStore::new(pool.pool().clone())))
        }
        "memory" => {
            tracing::warn!(backend = "memory", "Creating in-memory store, data is not persisted");
            Ok(Arc::new(MemoryStore::new()))
        }
        other => Err(AppError::UnsupportedBackend(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend() {
        let config = StoreConfig {
            backend: "memory".to_string(),
        };
        let store = create_store(&config, None).unwrap();
        assert_eq!(store.backend_type(), "memory");
    }

    #[test]
    fn test_postgres_without_pool() {
        let config = StoreConfig::default();
        assert!(matches!(
            create_store(&config, None),
            Err(AppError::MissingSetting("database.url"))
        ));
    }

    #[test]
    fn test_unknown_backend() {
        let config = StoreConfig {
            backend: "sqlite".to_string(),
        };
        assert!(matches!(
            create_store(&config, None),
            Err(AppError::UnsupportedBackend(name)) if name == "sqlite"
        ));
    }
}
