use crate::models::Product;

/// Products the user picked, in the order they were added.
///
/// The same product may appear any number of times. Entries are only ever
/// appended.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product to the end of the cart.
    pub fn add(&mut self, product: Product) {
        self.items.push(product);
    }

    /// Current contents in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// How many entries refer to the product with `id`.
    pub fn count_of(&self, id: u32) -> usize {
        self.items.iter().filter(|p| p.id == id).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_kept_in_order() {
        let a = Product::new(1, "Product 1", "1.jpeg", 500.0);
        let b = Product::new(2, "Product 2", "2.jpeg", 600.0);

        let mut cart = Cart::new();
        assert!(cart.is_empty());

        cart.add(a.clone());
        cart.add(b.clone());
        cart.add(a.clone());

        let ids: Vec<u32> = cart.items().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 1]);
        assert_eq!(cart.len(), 3);
        assert_eq!(cart.count_of(1), 2);
        assert_eq!(cart.count_of(2), 1);
        assert_eq!(cart.count_of(9), 0);
    }
}
