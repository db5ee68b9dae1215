//! Product Models

use jiff::civil::Date;
use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::models::ProductRepresentation;

/// Product request body
///
/// `name` and `price` are required. Any `createdAt` or `updatedAt` sent by the
/// client is ignored; the server stamps both dates itself.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductRequest {
    /// Product name
    #[serde(default)]
    pub name: Option<String>,

    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,

    /// Price as a decimal number
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    #[salvo(schema(value_type = Option<f64>))]
    pub price: Option<Decimal>,

    /// Creation date, `YYYY-MM-DD`
    #[serde(default)]
    #[salvo(schema(value_type = Option<String>))]
    pub created_at: Option<Date>,

    /// Last update date, `YYYY-MM-DD`
    #[serde(default)]
    #[salvo(schema(value_type = Option<String>))]
    pub updated_at: Option<Date>,
}

impl From<ProductRequest> for ProductRepresentation {
    fn from(request: ProductRequest) -> Self {
        ProductRepresentation {
            name: request.name,
            description: request.description,
            price: request.price,
            created_at: request.created_at,
            updated_at: request.updated_at,
        }
    }
}

/// Product response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// Product name
    pub name: Option<String>,

    /// Free-form description
    pub description: Option<String>,

    /// Price as a decimal number
    #[serde(with = "rust_decimal::serde::arbitrary_precision_option")]
    #[salvo(schema(value_type = Option<f64>))]
    pub price: Option<Decimal>,

    /// Creation date, `YYYY-MM-DD`
    #[salvo(schema(value_type = Option<String>))]
    pub created_at: Option<Date>,

    /// Last update date, `YYYY-MM-DD`, null until first update
    #[salvo(schema(value_type = Option<String>))]
    pub updated_at: Option<Date>,
}

impl From<ProductRepresentation> for ProductResponse {
    fn from(product: ProductRepresentation) -> Self {
        ProductResponse {
            name: product.name,
            description: product.description,
            price: product.price,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
