//! Repository and service tests against a real PostgreSQL.
//!
//! Each test starts its own container through `TestDatabase`, so they need a
//! running Docker daemon. Run with `cargo test -p domain_products -- --ignored`.

use domain_products::*;
use rust_decimal_macros::dec;
use test_utils::assertions::{assert_decimal_eq, assert_some};
use test_utils::{TestDataBuilder, TestDatabase};

fn service(db: &TestDatabase) -> ProductService<PgProductRepository> {
    ProductService::new(PgProductRepository::new(db.connection()))
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_create_assigns_id_and_round_trips_price() {
    let db = TestDatabase::new().await;
    let service = service(&db);
    let builder = TestDataBuilder::from_test_name("create_round_trip");

    let input = ProductInput {
        name: builder.name("product", "main"),
        price: builder.price(),
        quantity: builder.quantity(),
    };
    let created = service.create(input.clone()).await.unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, input.name);
    assert_decimal_eq(created.price, input.price, "stored price");
    assert_eq!(created.quantity, input.quantity);

    let fetched = service.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched.name, input.name);
    assert_decimal_eq(fetched.price, input.price, "fetched price");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_widget_lifecycle_against_postgres() {
    let db = TestDatabase::new().await;
    let service = service(&db);

    let created = service
        .create(ProductInput {
            name: "Widget".to_string(),
            price: dec!(10.50),
            quantity: 3,
        })
        .await
        .unwrap();
    assert_eq!(created.id, 1);

    let updated = service
        .update(
            created.id,
            ProductInput {
                name: "Widget Pro".to_string(),
                price: dec!(12.00),
                quantity: 1,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Widget Pro");

    let fetched = service.get_by_id(created.id).await.unwrap();
    assert_eq!(fetched.name, "Widget Pro");
    assert_decimal_eq(fetched.price, dec!(12.00), "updated price");
    assert_eq!(fetched.quantity, 1);

    service.delete(created.id).await.unwrap();
    assert!(matches!(
        service.get_by_id(created.id).await,
        Err(ProductError::NotFound(1))
    ));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_get_all_in_insertion_order_without_deleted() {
    let db = TestDatabase::new().await;
    let service = service(&db);

    let mut ids = Vec::new();
    for name in ["Widget", "Gadget", "Gizmo"] {
        let product = service
            .create(ProductInput {
                name: name.to_string(),
                price: dec!(1.00),
                quantity: 1,
            })
            .await
            .unwrap();
        ids.push(product.id);
    }
    service.delete(ids[1]).await.unwrap();

    let names: Vec<String> = service
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, ["Widget", "Gizmo"]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_save_after_concurrent_delete_is_not_found() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let product = repo
        .create(ProductInput {
            name: "Widget".to_string(),
            price: dec!(10.50),
            quantity: 3,
        })
        .await
        .unwrap();
    let stale = assert_some(repo.find_by_id(product.id).await.unwrap(), "fresh row");

    repo.delete(&product).await.unwrap();

    assert!(matches!(
        repo.save(stale.clone()).await,
        Err(ProductError::NotFound(_))
    ));
    assert!(matches!(
        repo.delete(&stale).await,
        Err(ProductError::NotFound(_))
    ));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_truncate_restarts_ids() {
    let db = TestDatabase::new().await;
    let service = service(&db);
    let input = ProductInput {
        name: "Widget".to_string(),
        price: dec!(1.00),
        quantity: 1,
    };

    service.create(input.clone()).await.unwrap();
    db.truncate("products").await;

    let again = service.create(input).await.unwrap();
    assert_eq!(again.id, 1);
}
