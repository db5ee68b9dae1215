//! Products service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use jiff::{Zoned, civil::Date};
use mockall::automock;
use tracing::instrument;

use crate::domain::products::{
    errors::{ProductsRepositoryError, ProductsServiceError},
    mapper::ProductMapper,
    models::{CreatedProduct, ProductRecord, ProductRepresentation, ProductUuid},
    repository::ProductsRepository,
};

/// Products service backed by a storage port.
pub struct StorageProductsService {
    repository: Arc<dyn ProductsRepository>,
    mapper: ProductMapper,
}

impl StorageProductsService {
    #[must_use]
    pub fn new(repository: Arc<dyn ProductsRepository>, mapper: ProductMapper) -> Self {
        Self { repository, mapper }
    }

    async fn find_existing(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRecord, ProductsServiceError> {
        self.repository
            .find_product(product)
            .await?
            .ok_or(ProductsServiceError::NotFound)
    }
}

impl fmt::Debug for StorageProductsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageProductsService")
            .field("mapper", &self.mapper)
            .finish_non_exhaustive()
    }
}

fn today() -> Date {
    Zoned::now().date()
}

#[async_trait]
impl ProductsService for StorageProductsService {
    #[instrument(name = "products.list", skip(self), err)]
    async fn list_products(&self) -> Result<Vec<ProductRepresentation>, ProductsServiceError> {
        let records = self.repository.find_products().await?;

        Ok(records
            .iter()
            .map(|record| self.mapper.to_representation(record))
            .collect())
    }

    #[instrument(name = "products.get", skip(self), fields(product_uuid = %product), err)]
    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRepresentation, ProductsServiceError> {
        let record = self.find_existing(product).await?;

        Ok(self.mapper.to_representation(&record))
    }

    #[instrument(name = "products.create", skip(self, product), err)]
    async fn create_product(
        &self,
        product: ProductRepresentation,
    ) -> Result<CreatedProduct, ProductsServiceError> {
        let record = self.mapper.to_record(ProductRepresentation {
            created_at: Some(today()),
            updated_at: None,
            ..product
        })?;

        let saved = self.repository.save_product(record).await?;

        let uuid = saved
            .uuid
            .ok_or(ProductsRepositoryError::UnassignedIdentifier)?;

        Ok(CreatedProduct {
            uuid,
            product: self.mapper.to_representation(&saved),
        })
    }

    #[instrument(
        name = "products.update",
        skip(self, update),
        fields(product_uuid = %product),
        err
    )]
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductRepresentation,
    ) -> Result<ProductRepresentation, ProductsServiceError> {
        let today = today();

        // created_at is replaced by the stored value during the merge
        let changes = self.mapper.to_record(ProductRepresentation {
            created_at: Some(today),
            updated_at: Some(today),
            ..update
        })?;

        let existing = self.find_existing(product).await?;

        let saved = self
            .repository
            .save_product(ProductRecord {
                name: changes.name,
                description: changes.description,
                price: changes.price,
                updated_at: changes.updated_at,
                ..existing
            })
            .await?;

        Ok(self.mapper.to_representation(&saved))
    }

    #[instrument(name = "products.delete", skip(self), fields(product_uuid = %product), err)]
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        self.find_existing(product).await?;

        self.repository.delete_product(product).await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieves all products in storage order.
    async fn list_products(&self) -> Result<Vec<ProductRepresentation>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(
        &self,
        product: ProductUuid,
    ) -> Result<ProductRepresentation, ProductsServiceError>;

    /// Creates a product dated today. Storage assigns its identifier.
    async fn create_product(
        &self,
        product: ProductRepresentation,
    ) -> Result<CreatedProduct, ProductsServiceError>;

    /// Replaces the mutable fields of an existing product and stamps
    /// `updated_at` with today's date.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductRepresentation,
    ) -> Result<ProductRepresentation, ProductsServiceError>;

    /// Deletes a product with the given UUID.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;
}
