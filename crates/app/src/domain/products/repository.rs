//! Products Repository
//!
//! The storage port the products service is written against, plus its
//! `PostgreSQL` implementation. Every call runs in its own transaction and
//! commits only on success.

use async_trait::async_trait;
use jiff_sqlx::Date as SqlxDate;
use mockall::automock;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    database::Db,
    domain::products::{
        errors::ProductsRepositoryError,
        models::{ProductRecord, ProductUuid},
    },
};

const LIST_PRODUCTS_SQL: &str = include_str!("sql/list_products.sql");
const FIND_PRODUCT_SQL: &str = include_str!("sql/find_product.sql");
const INSERT_PRODUCT_SQL: &str = include_str!("sql/insert_product.sql");
const REPLACE_PRODUCT_SQL: &str = include_str!("sql/replace_product.sql");
const DELETE_PRODUCT_SQL: &str = include_str!("sql/delete_product.sql");

#[derive(Debug, Clone)]
pub struct PgProductsRepository {
    db: Db,
}

impl PgProductsRepository {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    async fn insert_product(
        tx: &mut Transaction<'_, Postgres>,
        record: ProductRecord,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(INSERT_PRODUCT_SQL)
            .bind(record.name)
            .bind(record.description)
            .bind(record.price)
            .bind(SqlxDate::from(record.created_at))
            .bind(record.updated_at.map(SqlxDate::from))
            .fetch_one(&mut **tx)
            .await
    }

    async fn replace_product(
        tx: &mut Transaction<'_, Postgres>,
        product: ProductUuid,
        record: ProductRecord,
    ) -> Result<ProductRecord, sqlx::Error> {
        query_as::<Postgres, ProductRecord>(REPLACE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .bind(record.name)
            .bind(record.description)
            .bind(record.price)
            .bind(SqlxDate::from(record.created_at))
            .bind(record.updated_at.map(SqlxDate::from))
            .fetch_one(&mut **tx)
            .await
    }
}

#[async_trait]
impl ProductsRepository for PgProductsRepository {
    async fn find_products(&self) -> Result<Vec<ProductRecord>, ProductsRepositoryError> {
        let mut tx = self.db.begin().await?;

        let products = query_as::<Postgres, ProductRecord>(LIST_PRODUCTS_SQL)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn find_product(
        &self,
        product: ProductUuid,
    ) -> Result<Option<ProductRecord>, ProductsRepositoryError> {
        let mut tx = self.db.begin().await?;

        let found = query_as::<Postgres, ProductRecord>(FIND_PRODUCT_SQL)
            .bind(product.into_uuid())
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(found)
    }

    async fn save_product(
        &self,
        record: ProductRecord,
    ) -> Result<ProductRecord, ProductsRepositoryError> {
        let mut tx = self.db.begin().await?;

        let saved = match record.uuid {
            Some(product) => Self::replace_product(&mut tx, product, record).await?,
            None => Self::insert_product(&mut tx, record).await?,
        };

        tx.commit().await?;

        Ok(saved)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsRepositoryError> {
        let mut tx = self.db.begin().await?;

        query(DELETE_PRODUCT_SQL)
            .bind(product.into_uuid())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}

impl<'r> FromRow<'r, PgRow> for ProductRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: Some(ProductUuid::from_uuid(row.try_get("uuid")?)),
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            created_at: row.try_get::<SqlxDate, _>("created_at")?.to_jiff(),
            updated_at: row
                .try_get::<Option<SqlxDate>, _>("updated_at")?
                .map(SqlxDate::to_jiff),
        })
    }
}

#[automock]
#[async_trait]
pub trait ProductsRepository: Send + Sync {
    /// Retrieves every stored product in storage order.
    async fn find_products(&self) -> Result<Vec<ProductRecord>, ProductsRepositoryError>;

    /// Retrieves a single product, or `None` when no such product is stored.
    async fn find_product(
        &self,
        product: ProductUuid,
    ) -> Result<Option<ProductRecord>, ProductsRepositoryError>;

    /// Inserts the record when it has no identifier, otherwise replaces the
    /// stored record with that identifier.
    async fn save_product(
        &self,
        record: ProductRecord,
    ) -> Result<ProductRecord, ProductsRepositoryError>;

    /// Deletes a product. Deleting an absent product is not an error.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsRepositoryError>;
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rust_decimal::Decimal;
    use testresult::TestResult;
    use uuid::Uuid;

    use crate::test::TestContext;

    use super::*;

    fn new_record(name: &str) -> ProductRecord {
        ProductRecord {
            uuid: None,
            name: name.to_string(),
            description: Some("test".to_string()),
            price: Decimal::new(1000, 2),
            created_at: date(2026, 10, 17),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn save_without_uuid_inserts_and_assigns_uuid() -> TestResult {
        let ctx = TestContext::new().await;

        let saved = ctx.repository.save_product(new_record("Product 1")).await?;

        assert!(saved.uuid.is_some(), "storage should assign a uuid");
        assert_eq!(saved.name, "Product 1");
        assert_eq!(saved.description.as_deref(), Some("test"));
        assert_eq!(saved.price, Decimal::new(1000, 2));
        assert_eq!(saved.created_at, date(2026, 10, 17));
        assert_eq!(saved.updated_at, None);

        Ok(())
    }

    #[tokio::test]
    async fn find_product_returns_saved_record() -> TestResult {
        let ctx = TestContext::new().await;

        let saved = ctx.repository.save_product(new_record("Product 1")).await?;
        let uuid = saved.uuid.ok_or("missing uuid")?;

        let found = ctx.repository.find_product(uuid).await?;

        assert_eq!(found, Some(saved));

        Ok(())
    }

    #[tokio::test]
    async fn find_product_unknown_uuid_returns_none() -> TestResult {
        let ctx = TestContext::new().await;

        let found = ctx
            .repository
            .find_product(ProductUuid::from_uuid(Uuid::now_v7()))
            .await?;

        assert_eq!(found, None);

        Ok(())
    }

    #[tokio::test]
    async fn save_with_uuid_replaces_record() -> TestResult {
        let ctx = TestContext::new().await;

        let saved = ctx.repository.save_product(new_record("Product 1")).await?;

        let replaced = ctx
            .repository
            .save_product(ProductRecord {
                description: None,
                price: Decimal::new(2550, 2),
                updated_at: Some(date(2026, 10, 18)),
                ..saved.clone()
            })
            .await?;

        assert_eq!(replaced.uuid, saved.uuid);
        assert_eq!(replaced.description, None);
        assert_eq!(replaced.price, Decimal::new(2550, 2));
        assert_eq!(replaced.created_at, saved.created_at);
        assert_eq!(replaced.updated_at, Some(date(2026, 10, 18)));

        Ok(())
    }

    #[tokio::test]
    async fn find_products_returns_every_record() -> TestResult {
        let ctx = TestContext::new().await;

        let first = ctx.repository.save_product(new_record("Product 1")).await?;
        let second = ctx.repository.save_product(new_record("Product 2")).await?;

        let products = ctx.repository.find_products().await?;

        assert_eq!(products.len(), 2, "expected two products");
        assert!(products.contains(&first), "first product should be listed");
        assert!(products.contains(&second), "second product should be listed");

        Ok(())
    }

    #[tokio::test]
    async fn find_products_empty_when_none_saved() -> TestResult {
        let ctx = TestContext::new().await;

        let products = ctx.repository.find_products().await?;

        assert!(products.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_removes_record() -> TestResult {
        let ctx = TestContext::new().await;

        let saved = ctx.repository.save_product(new_record("Product 1")).await?;
        let uuid = saved.uuid.ok_or("missing uuid")?;

        ctx.repository.delete_product(uuid).await?;

        assert_eq!(ctx.repository.find_product(uuid).await?, None);

        Ok(())
    }

    #[tokio::test]
    async fn delete_product_unknown_uuid_is_silent() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.repository
            .delete_product(ProductUuid::from_uuid(Uuid::now_v7()))
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn price_is_stored_with_two_decimal_places() -> TestResult {
        let ctx = TestContext::new().await;

        let saved = ctx
            .repository
            .save_product(ProductRecord {
                price: Decimal::new(12_345, 3),
                ..new_record("Product 1")
            })
            .await?;

        assert_eq!(saved.price, Decimal::new(1235, 2));

        Ok(())
    }
}
