//! Cart lifecycle tests: persistence round-trips, identity isolation, and
//! recovery from unreadable records, run against the real file backend.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use sneakfit_core::{CartLine, IdentitySnapshot, ProductId, Size};
use sneakfit_integration_tests::cart_line;
use sneakfit_storefront::{CartManager, FileStore, KeyedStore, MemoryStore};

fn file_store(dir: &tempfile::TempDir) -> Arc<FileStore> {
    Arc::new(FileStore::new(dir.path()).unwrap())
}

#[test]
fn test_round_trip_persistence_across_reload() {
    let dir = tempfile::tempdir().unwrap();

    // First "page load": build a cart for u1.
    {
        let mut cart = CartManager::new(file_store(&dir));
        cart.init(&IdentitySnapshot::user("u1"));
        cart.add_line(cart_line("p1", "42", 2, 18999));
        cart.add_line(cart_line("p2", "10.5 US", 1, 9950));
    }

    // Simulated reload: a fresh store handle over the same directory and a
    // fresh manager re-running the lifecycle for the same identity.
    let mut cart = CartManager::new(file_store(&dir));
    cart.init(&IdentitySnapshot::user("u1"));

    assert_eq!(cart.lines().len(), 2);
    assert_eq!(cart.item_count(), 3);
    let first = cart.lines().first().unwrap();
    assert_eq!(first.product_id, ProductId::new("p1"));
    assert_eq!(first.details.brand.as_deref(), Some("Nike"));
}

#[test]
fn test_identity_switch_isolation_and_restore() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);

    let mut cart = CartManager::new(Arc::clone(&store) as Arc<dyn KeyedStore>);

    // Build u1's cart.
    cart.init(&IdentitySnapshot::user("u1"));
    cart.add_line(cart_line("p1", "42", 1, 18999));
    let u1_record = store.get("cart_u1").unwrap().unwrap();

    // Switch to u2 and shop there.
    cart.init(&IdentitySnapshot::user("u2"));
    assert!(cart.is_empty());
    cart.add_line(cart_line("p9", "44", 5, 7000));
    cart.clear();
    cart.add_line(cart_line("p2", "41", 1, 12000));

    // u1's stored record was never touched.
    assert_eq!(store.get("cart_u1").unwrap().unwrap(), u1_record);

    // Switching back restores exactly the pre-switch collection.
    cart.init(&IdentitySnapshot::user("u1"));
    assert_eq!(cart.lines().len(), 1);
    assert!(cart.contains(&ProductId::new("p1"), &Size::new("42")));
}

#[test]
fn test_guest_and_user_carts_are_independent() {
    let store = Arc::new(MemoryStore::new());
    let mut cart = CartManager::new(Arc::clone(&store) as Arc<dyn KeyedStore>);

    cart.init(&IdentitySnapshot::guest());
    cart.add_line(cart_line("g1", "42", 1, 5000));

    cart.init(&IdentitySnapshot::user("u1"));
    assert!(cart.is_empty());
    cart.add_line(cart_line("p1", "42", 1, 18999));

    assert!(store.get("cart").unwrap().unwrap().contains("g1"));
    assert!(store.get("cart_u1").unwrap().unwrap().contains("p1"));
}

#[test]
fn test_loading_identity_defers_and_never_writes() {
    let store = Arc::new(MemoryStore::new());
    store.set("cart_u1", r#"[{"productId":"kept","size":"42","quantity":1,"unitPrice":"10","name":"Kept"}]"#).unwrap();

    let mut cart = CartManager::new(Arc::clone(&store) as Arc<dyn KeyedStore>);
    cart.init(&IdentitySnapshot::Loading);
    assert!(!cart.is_initialized());

    // Mutations during identity resolution must not reach any record.
    cart.add_line(cart_line("p1", "42", 1, 1000));
    assert_eq!(store.get("cart").unwrap(), None);
    assert!(store.get("cart_u1").unwrap().unwrap().contains("kept"));

    // Once the identity resolves, stored state wins.
    cart.init(&IdentitySnapshot::user("u1"));
    assert_eq!(cart.lines().len(), 1);
    assert!(cart.contains(&ProductId::new("kept"), &Size::new("42")));
}

#[test]
fn test_malformed_record_resets_to_empty_then_heals() {
    let dir = tempfile::tempdir().unwrap();
    let store = file_store(&dir);
    store.set("cart_u1", "{not json at all").unwrap();

    let mut cart = CartManager::new(Arc::clone(&store) as Arc<dyn KeyedStore>);
    cart.init(&IdentitySnapshot::user("u1"));
    assert!(cart.is_empty());

    // The next write-back replaces the malformed record with a valid one.
    cart.add_line(cart_line("p1", "42", 1, 18999));
    let healed: Vec<CartLine> =
        serde_json::from_str(&store.get("cart_u1").unwrap().unwrap()).unwrap();
    assert_eq!(healed.len(), 1);
}

#[test]
fn test_zero_quantity_record_is_malformed() {
    let store = Arc::new(MemoryStore::new());
    store
        .set(
            "cart_u1",
            r#"[{"productId":"p1","size":"42","quantity":0,"unitPrice":"10","name":"Air Zoom"}]"#,
        )
        .unwrap();

    let mut cart = CartManager::new(Arc::clone(&store) as Arc<dyn KeyedStore>);
    cart.init(&IdentitySnapshot::user("u1"));
    assert!(cart.is_empty());
}

#[test]
fn test_persisted_layout_is_camel_case_array() {
    let store = Arc::new(MemoryStore::new());
    let mut cart = CartManager::new(Arc::clone(&store) as Arc<dyn KeyedStore>);
    cart.init(&IdentitySnapshot::user("u1"));
    cart.add_line(cart_line("p1", "42", 2, 18999));

    let raw = store.get("cart_u1").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = value.as_array().unwrap().first().unwrap();
    assert_eq!(first.get("productId").unwrap(), "p1");
    assert_eq!(first.get("quantity").unwrap(), 2);
    assert!(first.get("unitPrice").is_some());
    assert!(first.get("product_id").is_none());
}
