use std::{collections::HashMap, ops::Range, sync::Arc};

use log::info;
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    generate_catalog, generate_catalog_with, AssetLoader, AssetSource, Config, DecodedImage,
    Product, Screen, Session,
};

/// Cards kept loaded on each side of the selected one.
pub(crate) const PRELOAD_CARDS: usize = 3;

/// Image state of one product card.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSlot {
    /// Load requested, nothing to show yet.
    Loading,
    /// Decoded thumbnail ready to draw.
    Ready(DecodedImage),
    /// Load failed. Drawn exactly like `Loading`.
    Failed,
}

impl ImageSlot {
    pub fn image(&self) -> Option<&DecodedImage> {
        match self {
            ImageSlot::Ready(image) => Some(image),
            ImageSlot::Loading | ImageSlot::Failed => None,
        }
    }
}

/// Main application state.
pub struct AppState {
    /// Catalog, cart and active screen.
    pub(crate) session: Session,
    /// Background image loader.
    pub(crate) loader: AssetLoader,
    /// Image state per asset key. Keys without an entry were never requested.
    pub(crate) images: HashMap<String, ImageSlot>,
    /// Index of the highlighted card on the home screen.
    pub(crate) selected_product: usize,
    /// Transient status line (e.g. after adding to the cart).
    pub(crate) status_message: Option<String>,
    /// Should the application quit?
    pub should_quit: bool,
}

impl AppState {
    /// Create the UI state for an existing session.
    pub fn new(session: Session, source: Arc<dyn AssetSource>) -> Self {
        Self {
            session,
            loader: AssetLoader::new(source),
            images: HashMap::new(),
            selected_product: 0,
            status_message: None,
            should_quit: false,
        }
    }

    /// Start a session as described by `config`.
    pub fn from_config(config: &Config) -> Self {
        let catalog = match config.seed {
            Some(seed) => generate_catalog_with(&mut StdRng::seed_from_u64(seed)),
            None => generate_catalog(),
        };
        info!(
            "Session started: {} products, assets from {}, seed {:?}",
            catalog.len(),
            config.assets_dir.display(),
            config.seed
        );
        Self::new(Session::new(catalog), config.asset_source())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn selected_index(&self) -> usize {
        self.selected_product
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.session.catalog().products().get(self.selected_product)
    }

    pub fn image_slot(&self, key: &str) -> Option<&ImageSlot> {
        self.images.get(key)
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Catalog indices whose cards are considered on screen.
    pub(crate) fn card_window(&self) -> Range<usize> {
        let len = self.session.catalog().len();
        let start = self.selected_product.saturating_sub(PRELOAD_CARDS);
        let end = (self.selected_product + PRELOAD_CARDS + 1).min(len);
        start..end
    }

    /// Switch screens through the session.
    pub(crate) fn select_screen(&mut self, screen: Screen) {
        self.session.select(screen);
        self.clear_status();
    }

    pub(crate) fn move_selection(&mut self, delta: isize) {
        let last = self.session.catalog().len().saturating_sub(1);
        let target = self.selected_product.saturating_add_signed(delta);
        self.selected_product = target.min(last);
    }

    /// Put the highlighted product into the cart.
    pub(crate) fn add_selected_to_cart(&mut self) {
        let Some(id) = self.selected_product().map(|p| p.id) else {
            return;
        };
        if let Some(product) = self.session.add_to_cart(id) {
            let title = product.title.clone();
            let size = self.session.cart().len();
            self.set_status(format!("Added {title} to cart ({size} item(s))"));
        }
    }

    /// Release all background work before exit.
    pub fn shutdown(&mut self) {
        self.loader.cancel_all();
        info!("Session closed with {} item(s) in cart", self.session.cart().len());
    }

    pub(crate) fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub(crate) fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }
}
