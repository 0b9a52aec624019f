//! Sample business logic and vial types shared by the integration tests.
//!
//! The cart service is a tiny in-memory accumulator whose only job is to
//! give the tagged test suites something real to exercise.

#![allow(dead_code)]

use std::collections::HashMap;

testing_vial::nameable!(
    /// Vial for shopping-cart behaviour.
    pub CartVial => "Cart"
);

testing_vial::nameable!(
    /// Vial for product handling.
    pub ProductVial => "Product"
);

/// A shopping cart, identified by its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cart(pub u32);

/// A product with a price in cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub price_cents: u64,
}

impl Product {
    pub fn new(name: &str, price_cents: u64) -> Self {
        Self {
            name: name.to_string(),
            price_cents,
        }
    }
}

/// In-memory cart accumulator.
#[derive(Debug, Default)]
pub struct CartService {
    carts: HashMap<Cart, Vec<Product>>,
}

impl CartService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` copies of `product` to `cart`, creating the cart if
    /// needed.
    pub fn add_to_cart(&mut self, cart: Cart, product: &Product, quantity: usize) {
        self.carts
            .entry(cart)
            .or_default()
            .extend(std::iter::repeat(product.clone()).take(quantity));
    }

    /// Total price of everything in `cart`, zero for unknown carts.
    pub fn cart_total(&self, cart: Cart) -> u64 {
        self.carts
            .get(&cart)
            .map(|products| products.iter().map(|p| p.price_cents).sum())
            .unwrap_or(0)
    }
}
