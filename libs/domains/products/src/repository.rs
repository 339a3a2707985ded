use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductInput};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product; storage assigns the id
    async fn create(&self, input: ProductInput) -> ProductResult<Product>;

    /// Write every mutable field of an existing product.
    ///
    /// Fails with `NotFound` if the row no longer exists.
    async fn save(&self, product: Product) -> ProductResult<Product>;

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// All products in insertion (ascending id) order
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    /// Fails with `NotFound` if the row no longer exists.
    async fn delete(&self, product: &Product) -> ProductResult<()>;
}

#[derive(Debug)]
struct Store {
    next_id: i64,
    products: BTreeMap<i64, Product>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            next_id: 1,
            products: BTreeMap::new(),
        }
    }
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Ids start at 1 and are never reused, even after a delete.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: ProductInput) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let id = store.next_id;
        store.next_id += 1;

        let product = Product::new(id, input);
        store.products.insert(id, product.clone());
        Ok(product)
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        match store.products.get_mut(&product.id) {
            Some(existing) => {
                *existing = product.clone();
                Ok(product)
            }
            None => Err(ProductError::NotFound(product.id)),
        }
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn delete(&self, product: &Product) -> ProductResult<()> {
        let mut store = self.store.write().await;

        store
            .products
            .remove(&product.id)
            .map(|_| ())
            .ok_or(ProductError::NotFound(product.id))
    }
}
