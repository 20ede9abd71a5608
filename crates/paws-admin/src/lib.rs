//! # paws-admin
//!
//! Triage state machines for the admin panel.
//!
//! The reducers in [`reports`], [`adoptions`] and [`partnerships`] are pure:
//! they take the current list by reference and return a new list together with
//! the notification to emit, or a [`CoreError`](paws_core::errors::CoreError)
//! naming why nothing changed. [`partners`] validates directory contact
//! forms. [`AdminBoard`] owns the lists, applies the
//! configured [`UnknownIdPolicy`](paws_core::enums::UnknownIdPolicy) and hands
//! notifications to a sink.

pub mod adoptions;
pub mod board;
pub mod partners;
pub mod partnerships;
mod reduced;
pub mod reports;

pub use board::{AdminBoard, DEFAULT_RECORD_LIMIT, Outcome};
pub use reduced::Reduced;
