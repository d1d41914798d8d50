//! Database connection pool management
//!
//! Uses sqlx PgPool sized and timed from [`DatabaseConfig`].

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{error, info};

use crate::config::DatabaseConfig;
use crate::error::{DbError, Result};

/// Create a PostgreSQL connection pool and verify it can connect.
///
/// # Errors
///
/// `DbError::Config` for unusable settings, `DbError::Connection` if the
/// server cannot be reached. Callers should treat both as fatal at startup.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DatabaseConfig::load(None)?).await?;
/// ```
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    config.validate()?;
    let options = config.connect_options()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.pool_size)
        .acquire_timeout(config.connect_timeout())
        .connect_with(options)
        .await
        .map_err(|err| {
            error!(error = %err, "failed to connect to database");
            DbError::Connection(err)
        })?;

    info!(
        pool_size = config.pool_size,
        database = %config.database,
        "connected to database"
    );
    Ok(pool)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p lightbnb-db -- --ignored

    pub(crate) async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let config = DatabaseConfig {
            url: Some(url),
            ..Default::default()
        };
        let pool = create_pool(&config).await.expect("pool creation failed");
        crate::db::migrations::run(&pool)
            .await
            .expect("migrations failed");
        pool
    }

    /// Lazy pool aimed at a closed port: every query fails fast.
    pub(crate) fn unreachable_pool() -> PgPool {
        let options = DatabaseConfig {
            host: "127.0.0.1".into(),
            port: 1,
            ..Default::default()
        }
        .connect_options()
        .expect("valid options");

        PgPoolOptions::new()
            .acquire_timeout(std::time::Duration::from_secs(1))
            .connect_lazy_with(options)
    }

    #[tokio::test]
    async fn unreachable_server_is_connection_error() {
        let config = DatabaseConfig {
            host: "127.0.0.1".into(),
            port: 1,
            connect_timeout_secs: 1,
            ..Default::default()
        };

        let err = create_pool(&config).await.unwrap_err();
        assert!(matches!(err, DbError::Connection(_)));
    }

    #[tokio::test]
    async fn zero_pool_size_fails_before_connecting() {
        let config = DatabaseConfig {
            pool_size: 0,
            ..Default::default()
        };

        let err = create_pool(&config).await.unwrap_err();
        assert!(matches!(err, DbError::Config { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn concurrent_pool_access() {
        let pool = test_pool().await;

        let handles: Vec<_> = (0..10)
            .map(|i| {
                let pool = pool.clone();
                tokio::spawn(async move {
                    let result: (i32,) = sqlx::query_as("SELECT $1::int")
                        .bind(i)
                        .fetch_one(&pool)
                        .await
                        .expect("concurrent query failed");
                    result.0
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let result = handle.await.expect("task panicked");
            assert_eq!(result, i as i32);
        }
    }
}
