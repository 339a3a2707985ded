use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{DatabaseConnection, DbErr};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{Product, ProductInput},
    repository::ProductRepository,
};

/// PostgreSQL-backed ProductRepository.
///
/// `save` and `delete` are each a single statement, so a concurrent reader
/// never sees a half-written row.
#[derive(Clone)]
pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: ProductInput) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = self.base.insert(active_model).await?;

        tracing::debug!(product_id = model.id, "Inserted product row");
        Ok(model.into())
    }

    async fn save(&self, product: Product) -> ProductResult<Product> {
        let id = product.id;
        let active_model: entity::ActiveModel = product.into();

        match self.base.update(active_model).await {
            Ok(model) => Ok(model.into()),
            Err(DbErr::RecordNotUpdated) => Err(ProductError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let models = self.base.find_all_ordered(entity::Column::Id).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, product: &Product) -> ProductResult<()> {
        let rows_affected = self.base.delete_by_id(product.id).await?;

        if rows_affected == 0 {
            return Err(ProductError::NotFound(product.id));
        }
        Ok(())
    }
}
