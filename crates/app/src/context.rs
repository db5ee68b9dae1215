//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, DatabaseOptions, Db},
    domain::products::{
        PgProductsRepository, ProductMapper, ProductsRepository, ProductsService,
        StorageProductsService,
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to run database migrations")]
    Migrations(#[source] MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    /// Wire the products service over the given storage port.
    #[must_use]
    pub fn new(repository: Arc<dyn ProductsRepository>) -> Self {
        Self {
            products: Arc::new(StorageProductsService::new(repository, ProductMapper::new())),
        }
    }

    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or running
    /// migrations fails.
    pub async fn from_database_url(
        url: &str,
        options: DatabaseOptions,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url, options)
            .await
            .map_err(AppInitError::Database)?;

        if options.run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrations)?;

            info!("database migrations applied");
        }

        Ok(Self::new(Arc::new(PgProductsRepository::new(Db::new(pool)))))
    }
}
