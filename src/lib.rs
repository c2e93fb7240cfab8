//! Storefront API
//!
//! A small shop backend:
//! - Account registration and login with Argon2 password hashes
//! - A product catalog
//! - Per-user shopping carts
//!
//! Data lives in PostgreSQL, or in memory for development and tests.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use api::state::AppState;
use domain::DomainError;
use infrastructure::cart::{InMemoryCartRepository, PostgresCartRepository};
use infrastructure::product::{InMemoryProductRepository, PostgresProductRepository};
use infrastructure::storage::{connect_pool, run_storefront_migrations, StorageType};
use infrastructure::user::{Argon2Hasher, InMemoryUserRepository, PostgresUserRepository};
use tracing::info;

/// Create the application state for the configured storage backend.
///
/// The PostgreSQL backend connects, applies pending migrations and then wires
/// the repositories over the shared pool.
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let backend = StorageType::from_str(&config.storage.backend).ok_or_else(|| {
        DomainError::configuration(format!(
            "Unknown storage backend '{}'",
            config.storage.backend
        ))
    })?;

    info!("Storage backend: {:?}", backend);

    match backend {
        StorageType::InMemory => Ok(create_in_memory_state()),
        StorageType::Postgres => {
            let pg_config = config.storage.postgres_config().ok_or_else(|| {
                DomainError::configuration(
                    "storage.database_url or DATABASE_URL is required for PostgreSQL",
                )
            })?;

            info!("Connecting to PostgreSQL...");
            let pool = connect_pool(&pg_config).await?;
            info!("PostgreSQL connection established");

            run_storefront_migrations(&pool).await?;

            Ok(AppState::from_repositories(
                PostgresUserRepository::new(pool.clone()),
                PostgresProductRepository::new(pool.clone()),
                PostgresCartRepository::new(pool),
                Argon2Hasher::new(),
            ))
        }
    }
}

/// Application state over empty in-memory tables
pub fn create_in_memory_state() -> AppState {
    AppState::from_repositories(
        InMemoryUserRepository::new(),
        InMemoryProductRepository::new(),
        InMemoryCartRepository::new(),
        Argon2Hasher::new(),
    )
}
