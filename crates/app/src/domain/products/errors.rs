//! Products errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use rust_decimal::Decimal;
use thiserror::Error;

/// A representation that cannot become a record.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProductValidationError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("price `{0}` does not fit in 17 integer digits")]
    PriceOutOfRange(Decimal),
}

/// Storage port failures.
#[derive(Debug, Error)]
pub enum ProductsRepositoryError {
    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("storage did not assign an identifier")]
    UnassignedIdentifier,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ProductsRepositoryError {
    fn from(error: Error) -> Self {
        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

/// Products service errors.
#[derive(Debug, Error)]
pub enum ProductsServiceError {
    #[error("invalid product: {0}")]
    Validation(#[from] ProductValidationError),

    #[error("product not found")]
    NotFound,

    #[error("product storage failed")]
    Storage(#[from] ProductsRepositoryError),
}
