//! API layer - HTTP endpoints and middleware

pub mod accounts;
pub mod cart;
pub mod catalog;
pub mod health;
pub mod middleware;
pub mod router;
pub mod state;
pub mod types;

pub use router::create_router_with_state;
pub use state::AppState;
