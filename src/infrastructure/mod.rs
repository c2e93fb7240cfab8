//! Infrastructure layer - storage backends, services and logging

pub mod cart;
pub mod logging;
pub mod product;
pub mod storage;
pub mod user;
