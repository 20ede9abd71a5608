use clap::Subcommand;

/// Catalog listings.
#[derive(Clone, Debug, Subcommand)]
pub enum CatalogCommands {
    /// Products for sale.
    Products,
    /// Animals available for adoption.
    Animals,
}
