//! Shopping cart infrastructure

mod postgres_repository;
mod repository;
mod service;

pub use postgres_repository::PostgresCartRepository;
pub use repository::InMemoryCartRepository;
pub use service::{AddToCartRequest, CartService};
