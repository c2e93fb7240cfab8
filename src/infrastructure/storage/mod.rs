//! Storage infrastructure - connection pooling, schema and backend selection

mod factory;
pub mod migrations;
mod postgres;

pub use factory::StorageType;
pub use migrations::{run_storefront_migrations, Migration, PostgresMigrator};
pub use postgres::{connect_pool, PostgresConfig};
pub(crate) use postgres::{is_unique_violation, storage_error};

#[cfg(test)]
pub(crate) use postgres::test_support::TestDatabase;
