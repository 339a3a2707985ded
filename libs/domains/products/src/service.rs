use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Persist a new product and return it with its assigned id.
    ///
    /// Input is validated here as well, so callers outside the HTTP layer
    /// cannot store an invalid product.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: ProductInput) -> ProductResult<Product> {
        input.validate()?;

        let product = self.repository.create(input).await?;
        info!(product_id = product.id, "Created product");
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    /// Replace name, price and quantity of an existing product.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: ProductInput) -> ProductResult<Product> {
        input.validate()?;

        let mut product = self.get_by_id(id).await?;
        product.apply(input);

        let product = self.repository.save(product).await?;
        info!(product_id = id, "Updated product");
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ProductResult<()> {
        let product = self.get_by_id(id).await?;
        self.repository.delete(&product).await?;

        info!(product_id = id, "Deleted product");
        Ok(())
    }
}
