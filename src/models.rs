use std::fmt;

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

/// A catalog entry.  Products are created once by the catalog generator and
/// never change afterwards; two products are the same product when their
/// ids match.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: u32,
    pub title: String,
    /// File name of the bundled image, e.g. `"1.jpeg"`.
    pub image_asset_key: String,
    pub price: f64,
}

impl Product {
    pub fn new(id: u32, title: impl Into<String>, image_asset_key: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            title: title.into(),
            image_asset_key: image_asset_key.into(),
            price,
        }
    }

    /// Price as shown on product cards.
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.display_price())
    }
}

// ---------------------------------------------------------------------------
// Formatting helpers
// ---------------------------------------------------------------------------

/// Currency suffix used for every price in the store.
pub const CURRENCY: &str = "EGP";

/// Format a price with two decimals and the store currency.
pub fn format_price(price: f64) -> String {
    format!("{price:.2} {CURRENCY}")
}
