//! User-facing notifications and the sinks that receive them.
//!
//! Every successful mutation produces exactly one `Notification`. Delivery is
//! fire-and-forget: sinks never report failure back to the reducer's owner.

use std::sync::{Mutex, PoisonError};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AdoptionAction, ReportAction};

/// A human-readable `(title, description)` pair.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub fn report_updated(id: u32, action: ReportAction) -> Self {
        Self::new(
            "Report Updated",
            format!("Report #{id} has been {}.", action.past_tense()),
        )
    }

    #[must_use]
    pub fn adoption_updated(id: u32, action: AdoptionAction) -> Self {
        Self::new(
            "Adoption Request Updated",
            format!("Adoption request #{id} has been {}.", action.past_tense()),
        )
    }

    #[must_use]
    pub fn partnership_updated(id: u32) -> Self {
        Self::new(
            "Partnership Status Updated",
            format!("Partnership #{id} status has been updated."),
        )
    }

    #[must_use]
    pub fn report_submitted() -> Self {
        Self::new(
            "Report submitted",
            "Thank you for reporting this animal. We'll look into it as soon as possible.",
        )
    }

    #[must_use]
    pub fn adoption_submitted(animal_name: &str) -> Self {
        Self::new(
            "Adoption Request Submitted",
            format!(
                "Thank you for your interest in adopting {animal_name}. We'll be in touch soon!"
            ),
        )
    }

    #[must_use]
    pub fn added_to_cart(product_name: &str) -> Self {
        Self::new(
            "Added to Cart",
            format!("{product_name} has been added to your cart."),
        )
    }

    #[must_use]
    pub fn order_placed() -> Self {
        Self::new("Order Placed", "Thank you for your purchase!")
    }

    #[must_use]
    pub fn message_sent(partner_name: &str) -> Self {
        Self::new(
            "Message Sent",
            format!("Your message has been sent to {partner_name}. They will contact you soon."),
        )
    }
}

/// Receiver of notifications. Implementations must not block for long.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Emits each notification as a structured `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, notification: &Notification) {
        tracing::info!(
            title = %notification.title,
            description = %notification.description,
            "notification"
        );
    }
}

/// Collects notifications in memory, in delivery order.
#[derive(Debug, Default)]
pub struct MemorySink {
    delivered: Mutex<Vec<Notification>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything delivered so far.
    pub fn delivered(&self) -> Vec<Notification> {
        self.delivered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return everything delivered so far.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(
            &mut *self
                .delivered
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, notification: &Notification) {
        self.delivered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification.clone());
    }
}
