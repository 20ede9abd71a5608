//! # paws-core
//!
//! Core types shared by every Paws crate.
//!
//! This crate provides:
//! - Entity structs for reports, adoption requests, partnerships, products and animals
//! - Status enums with state machine transitions
//! - Integer minor-unit money (`Cents`)
//! - Notifications and the sink trait they are delivered through
//! - Cross-cutting error types
//! - Request/response bodies for the HTTP boundary
//! - Seed data for the in-memory catalog and admin board

pub mod entities;
pub mod enums;
pub mod errors;
pub mod money;
pub mod notification;
pub mod responses;
pub mod seed;
