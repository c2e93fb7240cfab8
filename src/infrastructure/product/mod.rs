//! Product catalog infrastructure

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresProductRepository;
pub use repository::InMemoryProductRepository;
pub use service::{AddProductRequest, CatalogService};
