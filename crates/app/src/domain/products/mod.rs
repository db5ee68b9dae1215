//! Products

pub mod errors;
pub mod mapper;
pub mod models;
pub mod repository;
pub mod service;

pub use errors::{ProductValidationError, ProductsRepositoryError, ProductsServiceError};
pub use mapper::ProductMapper;
pub use repository::{MockProductsRepository, PgProductsRepository, ProductsRepository};
pub use service::*;
