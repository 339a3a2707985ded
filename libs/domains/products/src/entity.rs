use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::entity::prelude::*;

use crate::models::{Product, ProductInput};

/// Sea-ORM entity for the `products` table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((14, 2)))")]
    pub price: Decimal,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            quantity: model.quantity,
        }
    }
}

/// New row: the id is left to the sequence.
impl From<ProductInput> for ActiveModel {
    fn from(input: ProductInput) -> Self {
        Self {
            id: NotSet,
            name: Set(input.name),
            price: Set(input.price),
            quantity: Set(input.quantity),
        }
    }
}

/// Existing row: every mutable column is written, keyed by id.
impl From<Product> for ActiveModel {
    fn from(product: Product) -> Self {
        Self {
            id: Unchanged(product.id),
            name: Set(product.name),
            price: Set(product.price),
            quantity: Set(product.quantity),
        }
    }
}
