//! Product Models

use jiff::civil::Date;
use rust_decimal::Decimal;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
///
/// The stored form of a product. `uuid` is `None` until storage assigns one
/// on first insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: Option<ProductUuid>,
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub created_at: Date,
    pub updated_at: Option<Date>,
}

/// Product Representation
///
/// The form exchanged with callers. Carries no identifier and every field may
/// be omitted; required fields are checked when mapping into a record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductRepresentation {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub created_at: Option<Date>,
    pub updated_at: Option<Date>,
}

/// Created Product
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedProduct {
    /// Identifier assigned by storage
    pub uuid: ProductUuid,

    /// The stored product
    pub product: ProductRepresentation,
}
