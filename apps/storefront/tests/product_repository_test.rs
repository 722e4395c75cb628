//! Product Repository Contract Tests
//!
//! Runs the same checks against the SQLite store and the in-memory fake, so
//! the two stay interchangeable.

// Allow unwrap in tests - tests should panic on unexpected errors
#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use storefront::config::ProductStoreConfig;
use storefront::{
    CatalogError, InMemoryProductRepository, NewProduct, Product, ProductId, ProductRepository,
    SqliteProductRepository,
};
use tempfile::TempDir;
use test_case::test_case;

// =============================================================================
// Backends
// =============================================================================

#[derive(Debug, Clone, Copy)]
enum Backend {
    Sqlite,
    Memory,
}

/// Keeps the SQLite file alive for as long as the repository is used.
struct Store {
    repo: Arc<dyn ProductRepository>,
    _dir: Option<TempDir>,
}

async fn empty_store(backend: Backend) -> Store {
    match backend {
        Backend::Sqlite => {
            let dir = tempfile::tempdir().unwrap();
            let url = format!("sqlite://{}", dir.path().join("products.db").display());
            let repo = SqliteProductRepository::connect(&ProductStoreConfig::sqlite(url))
                .await
                .unwrap();
            Store {
                repo: Arc::new(repo),
                _dir: Some(dir),
            }
        }
        Backend::Memory => Store {
            repo: Arc::new(InMemoryProductRepository::new()),
            _dir: None,
        },
    }
}

// =============================================================================
// Contract
// =============================================================================

#[test_case(Backend::Sqlite ; "sqlite")]
#[test_case(Backend::Memory ; "memory")]
#[tokio::test]
async fn empty_store_lists_nothing(backend: Backend) {
    let store = empty_store(backend).await;

    assert!(store.repo.get_products().await.unwrap().is_empty());
}

#[test_case(Backend::Sqlite ; "sqlite")]
#[test_case(Backend::Memory ; "memory")]
#[tokio::test]
async fn add_assigns_distinct_ids(backend: Backend) {
    let store = empty_store(backend).await;

    let a = store
        .repo
        .add_product(NewProduct::new("Hair Brush", 3.0, "Combs"))
        .await
        .unwrap();
    let b = store
        .repo
        .add_product(NewProduct::new("Cat Treats", 6.5, ""))
        .await
        .unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(store.repo.get_product_by_id(a.id).await.unwrap(), Some(a));
    assert_eq!(store.repo.get_products().await.unwrap().len(), 2);
}

#[test_case(Backend::Sqlite ; "sqlite")]
#[test_case(Backend::Memory ; "memory")]
#[tokio::test]
async fn empty_strings_and_negative_prices_round_trip(backend: Backend) {
    let store = empty_store(backend).await;

    let added = store
        .repo
        .add_product(NewProduct::new("", -1.25, ""))
        .await
        .unwrap();

    let found = store.repo.get_product_by_id(added.id).await.unwrap().unwrap();
    assert_eq!(found.name, "");
    assert_eq!(found.price, -1.25);
}

#[test_case(Backend::Sqlite ; "sqlite")]
#[test_case(Backend::Memory ; "memory")]
#[tokio::test]
async fn update_replaces_all_fields(backend: Backend) {
    let store = empty_store(backend).await;
    let added = store
        .repo
        .add_product(NewProduct::new("Notebook", 2.5, "For thoughts"))
        .await
        .unwrap();

    let edit = Product::new(added.id, "Journal", 4.0, "");
    store.repo.update_product(&edit).await.unwrap();

    assert_eq!(store.repo.get_product_by_id(added.id).await.unwrap(), Some(edit));
}

#[test_case(Backend::Sqlite ; "sqlite")]
#[test_case(Backend::Memory ; "memory")]
#[tokio::test]
async fn update_missing_faults_but_delete_missing_does_not(backend: Backend) {
    let store = empty_store(backend).await;
    let ghost = Product::new(12345, "Ghost", 1.0, "");

    let err = store.repo.update_product(&ghost).await.unwrap_err();
    assert_eq!(
        err,
        CatalogError::UpdateOnMissingProduct {
            product_id: ProductId::new(12345)
        }
    );
    assert!(store.repo.get_products().await.unwrap().is_empty());

    store.repo.delete_product(ghost.id).await.unwrap();
}

#[test_case(Backend::Sqlite ; "sqlite")]
#[test_case(Backend::Memory ; "memory")]
#[tokio::test]
async fn delete_is_idempotent(backend: Backend) {
    let store = empty_store(backend).await;
    let added = store
        .repo
        .add_product(NewProduct::new("Desk Lamp", 18.0, ""))
        .await
        .unwrap();

    store.repo.delete_product(added.id).await.unwrap();
    store.repo.delete_product(added.id).await.unwrap();

    assert!(store.repo.get_product_by_id(added.id).await.unwrap().is_none());
}

#[test_case(Backend::Sqlite ; "sqlite")]
#[test_case(Backend::Memory ; "memory")]
#[tokio::test]
async fn deleted_ids_are_not_reused(backend: Backend) {
    let store = empty_store(backend).await;
    let first = store.repo.add_product(NewProduct::default()).await.unwrap();
    store.repo.delete_product(first.id).await.unwrap();

    let second = store.repo.add_product(NewProduct::default()).await.unwrap();

    assert_ne!(first.id, second.id);
}

#[test_case(Backend::Sqlite, f64::NAN ; "sqlite nan")]
#[test_case(Backend::Memory, f64::NAN ; "memory nan")]
#[test_case(Backend::Sqlite, f64::INFINITY ; "sqlite infinity")]
#[test_case(Backend::Memory, f64::NEG_INFINITY ; "memory negative infinity")]
#[tokio::test]
async fn non_finite_price_is_rejected_on_add(backend: Backend, price: f64) {
    let store = empty_store(backend).await;

    let err = store
        .repo
        .add_product(NewProduct::new("Broken", price, ""))
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::Storage(_)));
    assert!(store.repo.get_products().await.unwrap().is_empty());
}

#[test_case(Backend::Sqlite, f64::NAN ; "sqlite nan")]
#[test_case(Backend::Memory, f64::NAN ; "memory nan")]
#[test_case(Backend::Sqlite, f64::NEG_INFINITY ; "sqlite negative infinity")]
#[test_case(Backend::Memory, f64::INFINITY ; "memory infinity")]
#[tokio::test]
async fn non_finite_price_is_rejected_on_update(backend: Backend, price: f64) {
    let store = empty_store(backend).await;
    let added = store
        .repo
        .add_product(NewProduct::new("Kitchen Scale", 15.0, ""))
        .await
        .unwrap();

    let edit = Product::new(added.id, "Kitchen Scale", price, "");
    let err = store.repo.update_product(&edit).await.unwrap_err();

    assert!(matches!(err, CatalogError::Storage(_)));
    assert_eq!(store.repo.get_product_by_id(added.id).await.unwrap(), Some(added));
}

#[test_case(-1 ; "negative id")]
#[test_case(0 ; "zero id")]
#[test_case(9999 ; "unknown id")]
#[tokio::test]
async fn absent_ids_are_not_found_in_either_backend(id: i64) {
    for backend in [Backend::Sqlite, Backend::Memory] {
        let store = empty_store(backend).await;
        store
            .repo
            .add_product(NewProduct::new("Present", 1.0, ""))
            .await
            .unwrap();

        let found = store
            .repo
            .get_product_by_id(ProductId::new(id))
            .await
            .unwrap();

        assert!(found.is_none(), "{backend:?} returned a product for id {id}");
    }
}

#[tokio::test]
async fn seeded_fake_serves_development_catalog() {
    let repo = InMemoryProductRepository::seeded();

    let headphones = repo
        .get_product_by_id(ProductId::new(3))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(headphones.name, "Headphones");
    assert_eq!(headphones.price, 56.99);
    assert_eq!(headphones.description, "Award winning headphones");
}
