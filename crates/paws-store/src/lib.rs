//! # paws-store
//!
//! Client-side cart for the merchandise store.
//!
//! [`Cart`] is an immutable ledger: every operation returns a new cart and
//! leaves the original untouched, so a rejected input never corrupts state.
//! [`StoreSession`] owns one cart for the lifetime of a browsing session and
//! emits notifications for the actions the shopper sees.

mod cart;
mod quantity;
mod session;

pub use cart::{Cart, CartLine, CartView};
pub use quantity::parse_quantity;
pub use session::{OrderReceipt, StoreSession};
