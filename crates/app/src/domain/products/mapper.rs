//! Product Mapper
//!
//! Field-for-field translation between [`ProductRepresentation`] and
//! [`ProductRecord`]. Lifecycle fields are copied as given; assigning them is
//! the service's job.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::products::{
    errors::ProductValidationError,
    models::{ProductRecord, ProductRepresentation},
};

/// Prices are stored as `NUMERIC(19, 2)`: at most 17 digits before the point.
const PRICE_INTEGER_DIGITS: u32 = 17;

/// Rounds to cents the way the price column does and checks the result fits.
fn check_price(price: Decimal) -> Result<Decimal, ProductValidationError> {
    let limit = Decimal::from(10_i64.pow(PRICE_INTEGER_DIGITS));
    let stored = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    if stored.abs() < limit {
        Ok(price)
    } else {
        Err(ProductValidationError::PriceOutOfRange(price))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProductMapper;

impl ProductMapper {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Copy a representation into a record with no identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProductValidationError::MissingField`] when `name`, `price` or
    /// `created_at` is absent, and [`ProductValidationError::PriceOutOfRange`]
    /// when the price cannot be stored.
    pub fn to_record(
        &self,
        product: ProductRepresentation,
    ) -> Result<ProductRecord, ProductValidationError> {
        let ProductRepresentation {
            name,
            description,
            price,
            created_at,
            updated_at,
        } = product;

        Ok(ProductRecord {
            uuid: None,
            name: name.ok_or(ProductValidationError::MissingField("name"))?,
            description,
            price: check_price(price.ok_or(ProductValidationError::MissingField("price"))?)?,
            created_at: created_at.ok_or(ProductValidationError::MissingField("created_at"))?,
            updated_at,
        })
    }

    /// Copy a record into a representation, leaving the identifier behind.
    #[must_use]
    pub fn to_representation(&self, record: &ProductRecord) -> ProductRepresentation {
        ProductRepresentation {
            name: Some(record.name.clone()),
            description: record.description.clone(),
            price: Some(record.price),
            created_at: Some(record.created_at),
            updated_at: record.updated_at,
        }
    }
}
