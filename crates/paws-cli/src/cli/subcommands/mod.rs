pub mod admin;
pub mod catalog;
pub mod partners;

pub use admin::{AdminCommands, PartnershipCommands};
pub use catalog::CatalogCommands;
pub use partners::PartnersCommands;
