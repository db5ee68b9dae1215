//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use catalog_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::Validation(source) => {
            StatusError::bad_request().brief(format!("Invalid product payload: {source}"))
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::Storage(source) => {
            error!("product storage failed: {source}");

            StatusError::internal_server_error()
        }
    }
}
