//! Request and response types shared by the HTTP handlers

pub mod error;
pub mod json;
pub mod path;

pub use error::{ApiError, MessageResponse, GENERIC_FAILURE, NO_DATA};
pub use json::{text_or_number, Json};
pub use path::Path;
