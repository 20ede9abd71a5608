use std::sync::Arc;

use paws_core::entities::{Product, Record};
use paws_core::enums::UnknownIdPolicy;
use paws_core::errors::CoreError;
use paws_core::money::Cents;
use paws_core::notification::{Notification, NotificationSink};
use paws_core::seed;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartLine};
use crate::quantity::parse_quantity;

/// Snapshot of a placed order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OrderReceipt {
    pub lines: Vec<CartLine>,
    pub item_count: u32,
    pub total: Cents,
}

/// A shopper's browsing session: catalog, cart and notification sink.
///
/// Nothing survives the session; dropping it discards the cart.
pub struct StoreSession {
    catalog: Vec<Product>,
    cart: Cart,
    policy: UnknownIdPolicy,
    sink: Arc<dyn NotificationSink>,
}

impl StoreSession {
    pub fn new(
        catalog: Vec<Product>,
        policy: UnknownIdPolicy,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            policy,
            sink,
        }
    }

    /// Session over the seed catalog.
    pub fn seeded(policy: UnknownIdPolicy, sink: Arc<dyn NotificationSink>) -> Self {
        Self::new(seed::products(), policy, sink)
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add one unit of a catalog product. Unknown products are always an error.
    pub fn add_to_cart(&mut self, product_id: u32) -> Result<&Cart, CoreError> {
        let product = self
            .catalog
            .iter()
            .find(|product| product.id == product_id)
            .ok_or_else(|| CoreError::not_found(Product::ENTITY_TYPE, product_id))?;

        self.cart = self.cart.add(product);
        self.sink.notify(&Notification::added_to_cart(&product.name));
        tracing::debug!(product_id, quantity = ?self.cart.quantity_of(product_id), "added to cart");
        Ok(&self.cart)
    }

    /// Set a line's quantity. Returns `false` when the product is not in the
    /// cart and the policy is `ignore`.
    pub fn set_quantity(&mut self, product_id: u32, quantity: i64) -> Result<bool, CoreError> {
        match self.cart.set_quantity(product_id, quantity) {
            Ok(cart) => {
                self.cart = cart;
                Ok(true)
            }
            Err(error) if error.is_not_found() && self.policy == UnknownIdPolicy::Ignore => {
                tracing::debug!(product_id, "quantity change for product not in cart ignored");
                Ok(false)
            }
            Err(error) => Err(error),
        }
    }

    /// Set a line's quantity from the raw text of the number field.
    pub fn set_quantity_text(&mut self, product_id: u32, raw: &str) -> Result<bool, CoreError> {
        let quantity = parse_quantity(raw)?;
        self.set_quantity(product_id, i64::from(quantity))
    }

    /// Place the order: snapshot the cart, clear it and thank the shopper.
    pub fn place_order(&mut self) -> Result<OrderReceipt, CoreError> {
        if self.cart.is_empty() {
            return Err(CoreError::Validation("Cart is empty.".into()));
        }

        let receipt = OrderReceipt {
            lines: self.cart.lines().to_vec(),
            item_count: self.cart.item_count(),
            total: self.cart.total(),
        };
        self.cart = self.cart.clear();
        self.sink.notify(&Notification::order_placed());
        tracing::info!(items = receipt.item_count, total = %receipt.total, "order placed");
        Ok(receipt)
    }
}

impl std::fmt::Debug for StoreSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreSession")
            .field("catalog", &self.catalog.len())
            .field("cart", &self.cart)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
