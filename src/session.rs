use log::debug;

use crate::cart::Cart;
use crate::catalog::{generate_catalog, Catalog};
use crate::models::Product;
use crate::navigation::{Navigation, Screen};

/// Shown on the cart screen while nothing has been added.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// Body of the about screen.
pub const ABOUT_MESSAGE: &str = "About Screen - Brand info and logo will be here";

/// State of one running storefront: the catalog generated at start-up, the
/// cart and the active screen.
///
/// Rendering code receives a reference to the session and mutates it only
/// through [`Session::add_to_cart`] and [`Session::select`].
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    cart: Cart,
    navigation: Navigation,
}

/// What the active screen should display.
#[derive(Debug, Clone, PartialEq)]
pub enum View<'a> {
    Home { products: &'a [Product] },
    Cart(CartView<'a>),
    About,
}

/// Coarse cart screen content. Line items are carried along but only the
/// count is presented.
#[derive(Debug, Clone, PartialEq)]
pub enum CartView<'a> {
    Empty,
    Summary { count: usize, items: &'a [Product] },
}

impl CartView<'_> {
    pub fn message(&self) -> String {
        match self {
            CartView::Empty => EMPTY_CART_MESSAGE.to_string(),
            CartView::Summary { count, .. } => {
                format!("Cart Screen - {count} item(s). We will display them soon.")
            }
        }
    }
}

impl Session {
    /// Start a session around an existing catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            navigation: Navigation::new(),
        }
    }

    /// Start a session with a freshly generated catalog.
    pub fn start() -> Self {
        Self::new(generate_catalog())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn current(&self) -> Screen {
        self.navigation.current()
    }

    pub fn select(&mut self, screen: Screen) {
        if self.navigation.current() != screen {
            debug!("Screen {} -> {}", self.navigation.current().route(), screen.route());
        }
        self.navigation.select(screen);
    }

    /// Append any product to the cart.
    pub fn add(&mut self, product: Product) {
        debug!("Cart add: product {} (cart size {})", product.id, self.cart.len() + 1);
        self.cart.add(product);
    }

    /// Add-to-cart callback of the home screen: put the catalog product with
    /// `id` into the cart. Returns `None` for ids outside the catalog.
    pub fn add_to_cart(&mut self, id: u32) -> Option<&Product> {
        let product = self.catalog.get(id)?.clone();
        self.add(product);
        self.cart.items().last()
    }

    /// Resolve the active screen into its content.
    pub fn view(&self) -> View<'_> {
        match self.navigation.current() {
            Screen::Home => View::Home {
                products: self.catalog.products(),
            },
            Screen::Cart => {
                if self.cart.is_empty() {
                    View::Cart(CartView::Empty)
                } else {
                    View::Cart(CartView::Summary {
                        count: self.cart.len(),
                        items: self.cart.items(),
                    })
                }
            }
            Screen::About => View::About,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::start()
    }
}
