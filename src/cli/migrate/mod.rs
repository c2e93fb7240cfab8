//! Migrate command - applies pending PostgreSQL migrations and exits

use tracing::info;

use crate::config::AppConfig;
use crate::domain::DomainError;
use crate::infrastructure::logging;
use crate::infrastructure::storage::{connect_pool, run_storefront_migrations, PostgresMigrator};

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    let pg_config = config.storage.postgres_config().ok_or_else(|| {
        DomainError::configuration("storage.database_url or DATABASE_URL is required to migrate")
    })?;

    let pool = connect_pool(&pg_config).await?;
    run_storefront_migrations(&pool).await?;

    let version = PostgresMigrator::new(pool.clone()).current_version().await?;
    info!(version = ?version, "Database schema is up to date");

    pool.close().await;
    Ok(())
}
