use std::ops::Index;

use rand::Rng;

use crate::models::Product;

/// Number of products generated for every session.
pub const CATALOG_SIZE: u32 = 18;

/// Lowest possible sample price (inclusive).
pub const PRICE_MIN: f64 = 500.0;

/// Upper bound of sample prices (exclusive).
pub const PRICE_MAX: f64 = 800.01;

/// The fixed, ordered product list of a session.
///
/// Built once by [`generate_catalog`] and never modified, so prices stay the
/// same however often the home screen is drawn.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look a product up by id.
    pub fn get(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }
}

impl Index<usize> for Catalog {
    type Output = Product;

    fn index(&self, index: usize) -> &Product {
        &self.products[index]
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

/// Generate the session catalog using the thread-local RNG.
pub fn generate_catalog() -> Catalog {
    generate_catalog_with(&mut rand::rng())
}

/// Generate the session catalog from the given random source.
///
/// Products get ids `1..=18`, titles `"Product {i}"`, asset keys
/// `"{i}.jpeg"` and a price drawn uniformly from `[PRICE_MIN, PRICE_MAX)`.
pub fn generate_catalog_with<R: Rng>(rng: &mut R) -> Catalog {
    let products = (1..=CATALOG_SIZE)
        .map(|i| {
            Product::new(
                i,
                format!("Product {i}"),
                format!("{i}.jpeg"),
                rng.random_range(PRICE_MIN..PRICE_MAX),
            )
        })
        .collect();

    Catalog { products }
}
