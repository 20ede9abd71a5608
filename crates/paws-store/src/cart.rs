//! The cart ledger.

use paws_core::entities::{Product, Record};
use paws_core::errors::CoreError;
use paws_core::money::Cents;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One product in the cart. `quantity` is at least 1 while the line exists.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    #[must_use]
    pub fn subtotal(&self) -> Cents {
        self.product.price.times(self.quantity)
    }
}

/// Ordered list of cart lines, at most one per product id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn quantity_of(&self, product_id: u32) -> Option<u32> {
        self.line(product_id).map(|line| line.quantity)
    }

    /// Total number of units across lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Sum of `price * quantity` across lines, in cents.
    #[must_use]
    pub fn total(&self) -> Cents {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Add one unit of `product`, creating the line on first add.
    #[must_use]
    pub fn add(&self, product: &Product) -> Self {
        let mut next = self.clone();
        match next.lines.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => next.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            }),
        }
        next
    }

    /// Set the quantity of an existing line. `0` removes the line; negative
    /// values and values above `u32::MAX` are rejected.
    pub fn set_quantity(&self, product_id: u32, quantity: i64) -> Result<Self, CoreError> {
        if quantity < 0 {
            return Err(CoreError::Validation("Quantity cannot be negative.".into()));
        }
        let quantity = u32::try_from(quantity)
            .map_err(|_| CoreError::Validation(format!("Quantity {quantity} is too large.")))?;

        let index = self.index_of(product_id)?;
        let mut next = self.clone();
        if quantity == 0 {
            next.lines.remove(index);
        } else {
            next.lines[index].quantity = quantity;
        }
        Ok(next)
    }

    /// The `+` button.
    pub fn increment(&self, product_id: u32) -> Result<Self, CoreError> {
        let current = self.index_of(product_id).map(|i| self.lines[i].quantity)?;
        self.set_quantity(product_id, i64::from(current) + 1)
    }

    /// The `-` button. Dropping to zero removes the line.
    pub fn decrement(&self, product_id: u32) -> Result<Self, CoreError> {
        let current = self.index_of(product_id).map(|i| self.lines[i].quantity)?;
        self.set_quantity(product_id, i64::from(current) - 1)
    }

    pub fn remove(&self, product_id: u32) -> Result<Self, CoreError> {
        self.set_quantity(product_id, 0)
    }

    #[must_use]
    pub fn clear(&self) -> Self {
        Self::default()
    }

    /// Presentation snapshot with the total formatted to two decimals.
    #[must_use]
    pub fn view(&self) -> CartView {
        CartView {
            lines: self.lines.clone(),
            item_count: self.item_count(),
            total: self.total().to_string(),
        }
    }

    fn line(&self, product_id: u32) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.id == product_id)
    }

    fn index_of(&self, product_id: u32) -> Result<usize, CoreError> {
        self.lines
            .iter()
            .position(|line| line.product.id == product_id)
            .ok_or_else(|| CoreError::not_found(Product::ENTITY_TYPE, product_id))
    }
}

/// What the store page renders: lines, unit count and the display total.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub item_count: u32,
    pub total: String,
}

#[cfg(test)]
mod tests {
    use paws_core::seed;
    use pretty_assertions::assert_eq;

    use super::*;

    fn product(id: u32, price: &str) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            description: String::new(),
            price: price.parse().unwrap(),
            image_ref: String::new(),
        }
    }

    #[test]
    fn add_creates_then_increments() {
        let a = product(1, "9.99");
        let cart = Cart::new().add(&a).add(&a);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of(1), Some(2));
        assert_eq!(cart.total().to_string(), "19.98");
    }

    #[test]
    fn add_keeps_first_seen_order() {
        let products = seed::products();
        let cart = Cart::new()
            .add(&products[2])
            .add(&products[0])
            .add(&products[2]);
        let ids: Vec<u32> = cart.lines().iter().map(|l| l.product.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn total_for_catalog_example() {
        let products = seed::products();
        let cart = Cart::new()
            .add(&products[0])
            .add(&products[0])
            .add(&products[1]);
        assert_eq!(cart.total().to_string(), "74.97");
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn set_zero_removes_line() {
        let a = product(1, "9.99");
        let cart = Cart::new().add(&a).add(&a).set_quantity(1, 0).unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.quantity_of(1), None);
        assert_eq!(cart.total().to_string(), "0.00");
    }

    #[test]
    fn set_quantity_overwrites() {
        let a = product(1, "1.25");
        let cart = Cart::new().add(&a).set_quantity(1, 4).unwrap();
        assert_eq!(cart.quantity_of(1), Some(4));
        assert_eq!(cart.total().to_string(), "5.00");
    }

    #[test]
    fn negative_quantity_leaves_cart_unchanged() {
        let a = product(1, "1.25");
        let cart = Cart::new().add(&a);
        let err = cart.set_quantity(1, -3).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(cart.quantity_of(1), Some(1));
    }

    #[test]
    fn oversized_quantity_is_rejected() {
        let cart = Cart::new().add(&product(1, "1.00"));
        assert!(cart.set_quantity(1, i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn unknown_product_is_not_found() {
        let err = Cart::new().set_quantity(5, 1).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn decrement_to_zero_removes() {
        let a = product(1, "2.00");
        let cart = Cart::new().add(&a).increment(1).unwrap();
        assert_eq!(cart.quantity_of(1), Some(2));
        let cart = cart.decrement(1).unwrap().decrement(1).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn clear_empties() {
        let cart = Cart::new().add(&product(1, "2.00")).clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn view_formats_total() {
        let cart = Cart::new().add(&product(1, "0.10")).set_quantity(1, 3).unwrap();
        let view = cart.view();
        assert_eq!(view.total, "0.30");
        assert_eq!(view.item_count, 3);
    }
}
