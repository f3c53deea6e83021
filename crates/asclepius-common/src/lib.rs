//! Common error types shared by the Asclepius services.

pub mod error;

pub use error::{AppError, AppResult};
