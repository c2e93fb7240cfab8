//! Domain layer - entities, repository traits and errors

pub mod cart;
pub mod error;
pub mod product;
pub mod user;

pub use cart::{CartItem, CartItemId, CartItemMatch, CartRepository, NewCartItem};
pub use error::DomainError;
pub use product::{NewProduct, Product, ProductId, ProductRepository};
pub use user::{NewUser, User, UserId, UserRepository};
