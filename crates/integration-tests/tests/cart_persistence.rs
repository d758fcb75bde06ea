//! Cart persistence flows against the file-backed slot store.

#![allow(clippy::unwrap_used)]

use paradise_nursery_core::{Price, ProductId};
use paradise_nursery_integration_tests::TestDataDir;
use paradise_nursery_storefront::catalog::Catalog;

#[test]
fn test_cart_survives_sessions() {
    let data = TestDataDir::new();
    let catalog = Catalog::builtin();
    let fig = catalog.find(&ProductId::new("p1")).unwrap();
    let snake = catalog.find(&ProductId::new("p2")).unwrap();

    // Session one: fill the cart.
    let mut store = data.open_store();
    store.add_to_cart(fig.clone());
    store.add_to_cart(fig.clone());
    store.add_to_cart(snake.clone());
    let saved = store.state().clone();
    drop(store);

    // Session two: the cart comes back as left.
    let store = data.open_store();
    assert_eq!(*store.state(), saved);
    assert_eq!(store.total_items(), 3);
    assert_eq!(store.total_price(), Price::from_cents(2 * 4999 + 1999));
    assert_eq!(
        store.state().line(&ProductId::new("p1")).unwrap().quantity,
        2
    );
}

#[test]
fn test_update_and_remove_flow_persists() {
    let data = TestDataDir::new();
    let catalog = Catalog::builtin();
    let fig = catalog.find(&ProductId::new("p1")).unwrap();
    let snake = catalog.find(&ProductId::new("p2")).unwrap();

    let mut store = data.open_store();
    store.add_to_cart(fig.clone());
    store.add_to_cart(fig.clone());
    store.add_to_cart(fig.clone());
    store.add_to_cart(snake.clone());
    store.update_quantity(&ProductId::new("p1"), 1);
    drop(store);

    let mut store = data.open_store();
    assert_eq!(store.total_items(), 2);
    store.remove_item(&ProductId::new("p2"));
    drop(store);

    let store = data.open_store();
    assert_eq!(store.total_items(), 1);
    assert!(store.state().line(&ProductId::new("p2")).is_none());
}

#[test]
fn test_clear_persists_across_sessions() {
    let data = TestDataDir::new();
    let catalog = Catalog::builtin();

    let mut store = data.open_store();
    for product in catalog.products() {
        store.add_to_cart(product.clone());
    }
    store.clear_cart();
    drop(store);

    let store = data.open_store();
    assert!(store.state().is_empty());
    assert_eq!(store.total_items(), 0);
}

#[test]
fn test_missing_snapshot_starts_empty() {
    let data = TestDataDir::new();

    let store = data.open_store();
    assert!(store.state().is_empty());
    assert_eq!(store.total_price(), Price::ZERO);
}

#[test]
fn test_corrupt_snapshot_degrades_to_empty() {
    let data = TestDataDir::new();
    let catalog = Catalog::builtin();
    let fig = catalog.find(&ProductId::new("p1")).unwrap();

    let mut store = data.open_store();
    store.add_to_cart(fig.clone());
    drop(store);

    std::fs::write(data.snapshot_path(), "{ definitely not a cart").unwrap();

    // Startup is not blocked; the cart degrades to empty and stays usable.
    let mut store = data.open_store();
    assert!(store.state().is_empty());
    store.add_to_cart(fig.clone());
    drop(store);

    let store = data.open_store();
    assert_eq!(store.total_items(), 1);
}

#[test]
fn test_snapshot_file_wire_format() {
    let data = TestDataDir::new();
    let catalog = Catalog::builtin();
    let fig = catalog.find(&ProductId::new("p1")).unwrap();

    let mut store = data.open_store();
    store.add_to_cart(fig.clone());
    store.add_to_cart(fig.clone());
    drop(store);

    assert!(data.snapshot_path().ends_with("pn_cart.json"));

    let raw = std::fs::read_to_string(data.snapshot_path()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let line = &json["p1"];
    assert_eq!(line["qty"], 2);
    assert_eq!(line["product"]["id"], "p1");
    assert_eq!(line["product"]["name"], "Fiddle Leaf Fig");
    assert_eq!(line["product"]["category"], "Tree");
    assert_eq!(line["product"]["price"], 49.99);
    assert_eq!(
        line["product"]["imageRef"],
        "https://picsum.photos/id/1011/300/200"
    );
}
