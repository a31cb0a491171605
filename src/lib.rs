//! Safe Clothing storefront.
//!
//! A small shop prototype: a catalog of sample products with random prices,
//! an append-only cart and three screens (Home, Cart, About). The state model
//! lives in [`Session`]; the [`tui`] module draws it in a terminal.
//!
//! # Quick Start
//!
//! ```
//! use safe_clothing::{Screen, Session, View};
//!
//! let mut session = Session::start();
//! assert_eq!(session.current(), Screen::Home);
//!
//! session.add_to_cart(3);
//! session.select(Screen::Cart);
//! if let View::Cart(cart) = session.view() {
//!     println!("{}", cart.message());
//! }
//! ```

pub mod assets;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod session;
pub mod tui;

// Re-export the main public types at the crate root for convenience.
pub use assets::{
    decode_thumbnail, load_image, AssetEvent, AssetLoader, AssetSource, DecodedImage,
    DirAssetSource, MemoryAssetSource,
};
pub use cart::Cart;
pub use catalog::{generate_catalog, generate_catalog_with, Catalog, CATALOG_SIZE, PRICE_MAX, PRICE_MIN};
pub use config::Config;
pub use error::{Result, StoreError};
pub use models::{format_price, Product};
pub use navigation::{Navigation, Screen};
pub use session::{CartView, Session, View, ABOUT_MESSAGE, EMPTY_CART_MESSAGE};
