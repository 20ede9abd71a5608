use paws_config::PawsConfig;
use paws_core::entities::Product;
use paws_core::seed;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CatalogCommands;
use crate::output::output;

/// A product as the store page lists it: price formatted with the currency.
#[derive(Debug, Serialize)]
struct ProductListing {
    id: u32,
    name: String,
    price: String,
    description: String,
}

impl ProductListing {
    fn new(product: Product, currency_symbol: &str) -> Self {
        Self {
            id: product.id,
            price: format!("{currency_symbol}{}", product.price),
            name: product.name,
            description: product.description,
        }
    }
}

pub fn handle(
    action: &CatalogCommands,
    config: &PawsConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CatalogCommands::Products => {
            let listings = seed::products()
                .into_iter()
                .map(|product| ProductListing::new(product, &config.store.currency_symbol))
                .collect::<Vec<_>>();
            output(&listings, flags.format)
        }
        CatalogCommands::Animals => output(&seed::animals(), flags.format),
    }
}
