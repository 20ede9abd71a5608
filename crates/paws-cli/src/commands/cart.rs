use std::sync::Arc;

use anyhow::Context;
use paws_config::PawsConfig;
use paws_core::enums::UnknownIdPolicy;
use paws_core::money::Cents;
use paws_core::notification::{MemorySink, Notification, NotificationSink};
use paws_store::{CartLine, StoreSession};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CartArgs;
use crate::commands::shared::parse::parse_assignment;
use crate::output::output;

#[derive(Debug, Serialize)]
struct CartOutput {
    lines: Vec<CartLine>,
    item_count: u32,
    total: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skipped: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    order: Option<OrderSummary>,
    notifications: Vec<Notification>,
}

#[derive(Debug, Serialize)]
struct OrderSummary {
    item_count: u32,
    total: String,
}

/// Handle `paws cart`: adds first, then quantity updates, then the order.
pub fn handle(args: &CartArgs, config: &PawsConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let result = replay(args, config)?;
    output(&result, flags.format)
}

fn replay(args: &CartArgs, config: &PawsConfig) -> anyhow::Result<CartOutput> {
    let policy = if args.strict {
        UnknownIdPolicy::Reject
    } else {
        config.admin.unknown_id
    };
    let sink = Arc::new(MemorySink::new());
    let shared: Arc<dyn NotificationSink> = sink.clone();
    let mut session = StoreSession::seeded(policy, shared);

    for &product_id in &args.add {
        session
            .add_to_cart(product_id)
            .with_context(|| format!("cannot add product {product_id}"))?;
    }

    let mut skipped = Vec::new();
    for assignment in &args.set {
        let (product_id, raw) = parse_assignment(assignment)?;
        let applied = session
            .set_quantity_text(product_id, raw)
            .with_context(|| format!("cannot set quantity for product {product_id}"))?;
        if !applied {
            tracing::warn!(product_id, "product not in cart; quantity update skipped");
            skipped.push(product_id);
        }
    }

    let symbol = &config.store.currency_symbol;
    let order = if args.order {
        let receipt = session.place_order()?;
        Some(OrderSummary {
            item_count: receipt.item_count,
            total: money(symbol, receipt.total),
        })
    } else {
        None
    };

    let cart = session.cart();
    Ok(CartOutput {
        lines: cart.lines().to_vec(),
        item_count: cart.item_count(),
        total: money(symbol, cart.total()),
        skipped,
        order,
        notifications: sink.drain(),
    })
}

fn money(symbol: &str, amount: Cents) -> String {
    format!("{symbol}{amount}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(add: &[u32], set: &[&str], order: bool) -> CartArgs {
        CartArgs {
            add: add.to_vec(),
            set: set.iter().map(ToString::to_string).collect(),
            order,
            strict: false,
        }
    }

    #[test]
    fn adds_accumulate_into_total() {
        let result = replay(&args(&[1, 1, 2], &[], false), &PawsConfig::default()).unwrap();
        assert_eq!(result.item_count, 3);
        assert_eq!(result.total, "$74.97");
        assert_eq!(result.notifications.len(), 3);
        assert_eq!(result.notifications[0].title, "Added to Cart");
    }

    #[test]
    fn set_zero_removes_line() {
        let result = replay(&args(&[1, 3], &["1=0"], false), &PawsConfig::default()).unwrap();
        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.lines[0].product.id, 3);
        assert_eq!(result.total, "$9.99");
    }

    #[test]
    fn negative_quantity_is_an_error() {
        let error = replay(&args(&[1], &["1=-2"], false), &PawsConfig::default()).unwrap_err();
        assert!(format!("{error:#}").contains("cannot be negative"));
    }

    #[test]
    fn unknown_line_is_skipped_unless_strict() {
        let lenient = replay(&args(&[1], &["2=5"], false), &PawsConfig::default()).unwrap();
        assert_eq!(lenient.skipped, vec![2]);

        let mut strict = args(&[1], &["2=5"], false);
        strict.strict = true;
        assert!(replay(&strict, &PawsConfig::default()).is_err());
    }

    #[test]
    fn order_clears_cart_and_reports_receipt() {
        let mut config = PawsConfig::default();
        config.store.currency_symbol = "€".to_string();
        let result = replay(&args(&[2, 2], &[], true), &config).unwrap();

        assert!(result.lines.is_empty());
        assert_eq!(result.total, "€0.00");
        let order = result.order.unwrap();
        assert_eq!(order.item_count, 2);
        assert_eq!(order.total, "€29.98");
    }

    #[test]
    fn ordering_an_empty_cart_fails() {
        assert!(replay(&args(&[], &[], true), &PawsConfig::default()).is_err());
    }
}
