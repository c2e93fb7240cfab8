//! User domain
//!
//! Domain types and the repository trait for registered accounts.

mod entity;
mod repository;

pub use entity::{NewUser, User, UserId};
pub use repository::UserRepository;

#[cfg(test)]
pub use repository::mock::MockUserRepository;
