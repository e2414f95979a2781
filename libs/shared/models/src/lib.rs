pub mod auth;
pub mod error;

pub use auth::{Role, Session};
pub use error::AppError;
