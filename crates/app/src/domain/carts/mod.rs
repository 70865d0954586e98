//! Carts

pub mod errors;
pub mod models;
pub(crate) mod repositories;
pub mod service;

pub use errors::CartsServiceError;
pub use repositories::CartsRepositoryError;
pub use service::*;
