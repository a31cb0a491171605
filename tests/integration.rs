//! Session-level tests for the storefront state model.
//!
//! Run with:
//!
//! ```bash
//! cargo test -- --nocapture
//! ```

use rand::{rngs::StdRng, SeedableRng};
use safe_clothing::{
    generate_catalog, generate_catalog_with, CartView, Product, Screen, Session, View,
    CATALOG_SIZE, EMPTY_CART_MESSAGE, PRICE_MAX, PRICE_MIN,
};

fn seeded_session(seed: u64) -> Session {
    Session::new(generate_catalog_with(&mut StdRng::seed_from_u64(seed)))
}

// ---------------------------------------------------------------------------
// 1. Catalog
// ---------------------------------------------------------------------------

#[test]
fn test_catalog_shape() {
    let catalog = generate_catalog();
    assert_eq!(catalog.len(), CATALOG_SIZE as usize);

    for (i, product) in catalog.iter().enumerate() {
        let id = i as u32 + 1;
        assert_eq!(product.id, id);
        assert_eq!(product.title, format!("Product {id}"));
        assert_eq!(product.image_asset_key, format!("{id}.jpeg"));
        assert!(
            (PRICE_MIN..PRICE_MAX).contains(&product.price),
            "price {} out of range",
            product.price
        );
    }
    println!("[1] Catalog of {} products", catalog.len());
}

#[test]
fn test_prices_stable_across_navigation() {
    let mut session = Session::start();
    let before: Vec<f64> = session.catalog().iter().map(|p| p.price).collect();

    for screen in [Screen::Cart, Screen::About, Screen::Home, Screen::Cart, Screen::Home] {
        session.select(screen);
        let _ = session.view();
    }

    let after: Vec<f64> = session.catalog().iter().map(|p| p.price).collect();
    assert_eq!(before, after);
}

// ---------------------------------------------------------------------------
// 2. Cart
// ---------------------------------------------------------------------------

#[test]
fn test_cart_preserves_order_and_duplicates() {
    let mut session = seeded_session(1);
    session.add_to_cart(1);
    session.add_to_cart(2);
    session.add_to_cart(1);

    let ids: Vec<u32> = session.cart().items().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 1]);
    assert_eq!(session.cart().len(), 3);
    assert!(!session.cart().is_empty());
}

#[test]
fn test_add_accepts_any_product() {
    let mut session = seeded_session(2);
    let outside = Product::new(100, "Gift card", "gift.jpeg", 0.0);
    session.add(outside.clone());
    session.add(outside.clone());
    assert_eq!(session.cart().items(), &[outside.clone(), outside][..]);
}

#[test]
fn test_added_product_matches_catalog_entry() {
    let mut session = seeded_session(3);
    let expected = session.catalog().get(5).cloned().unwrap();
    let added = session.add_to_cart(5).cloned().unwrap();
    assert_eq!(added.id, expected.id);
    assert_eq!(added.price, expected.price);
    assert_eq!(added.title, expected.title);
}

// ---------------------------------------------------------------------------
// 3. Navigation
// ---------------------------------------------------------------------------

#[test]
fn test_new_session_starts_home_with_empty_cart() {
    let session = Session::start();
    assert_eq!(session.current(), Screen::Home);
    assert_eq!(session.cart().len(), 0);
    assert!(session.cart().is_empty());
}

#[test]
fn test_every_transition_is_allowed() {
    let mut session = Session::start();
    for from in Screen::ALL {
        for to in Screen::ALL {
            session.select(from);
            session.select(to);
            assert_eq!(session.current(), to, "{from:?} -> {to:?}");
        }
    }
}

// ---------------------------------------------------------------------------
// 4. Screen content
// ---------------------------------------------------------------------------

#[test]
fn test_home_view_lists_catalog() {
    let session = seeded_session(4);
    match session.view() {
        View::Home { products } => {
            assert_eq!(products.len(), 18);
            assert_eq!(products, session.catalog().products());
        }
        other => panic!("expected home view, got {other:?}"),
    }
}

#[test]
fn test_about_view_has_no_data() {
    let mut session = seeded_session(5);
    session.add_to_cart(1);
    session.select(Screen::About);
    assert_eq!(session.view(), View::About);
}

#[test]
fn test_cart_scenario() {
    let mut session = seeded_session(6);

    session.select(Screen::Cart);
    let view = session.view();
    assert_eq!(view, View::Cart(CartView::Empty));
    if let View::Cart(cart) = view {
        assert_eq!(cart.message(), EMPTY_CART_MESSAGE);
    }

    session.select(Screen::Home);
    session.add_to_cart(3);
    session.select(Screen::Cart);

    match session.view() {
        View::Cart(CartView::Summary { count, items }) => {
            assert_eq!(count, 1);
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].id, 3);
            assert_eq!(items[0].title, "Product 3");
        }
        other => panic!("expected cart summary, got {other:?}"),
    }
}
