//! Shopping cart domain

mod entity;
mod repository;

pub use entity::{CartItem, CartItemId, CartItemMatch, NewCartItem};
pub use repository::CartRepository;

#[cfg(test)]
pub use repository::mock::MockCartRepository;
