//! Product catalog domain

mod entity;
mod repository;

pub use entity::{NewProduct, Product, ProductId};
pub use repository::ProductRepository;

#[cfg(test)]
pub use repository::mock::MockProductRepository;
