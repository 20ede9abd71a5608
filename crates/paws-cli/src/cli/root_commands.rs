use clap::{Args, Subcommand};

use crate::cli::subcommands::{AdminCommands, CatalogCommands, PartnersCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP API.
    Serve(ServeArgs),
    /// Triage reports, adoption requests and partnerships on the seed board.
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
    /// Replay cart operations against the seed catalog.
    Cart(CartArgs),
    /// Browse the seed catalog.
    Catalog {
        #[command(subcommand)]
        action: CatalogCommands,
    },
    /// Browse the partner directory and contact a partner.
    Partners {
        #[command(subcommand)]
        action: PartnersCommands,
    },
    /// Print the JSON Schema for a data type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Interface to bind (overrides server.host).
    #[arg(long)]
    pub host: Option<String>,
    /// Port to bind (overrides server.port).
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Clone, Debug, Args)]
pub struct CartArgs {
    /// Add one unit of a product. Repeat to add more.
    #[arg(long = "add", value_name = "ID")]
    pub add: Vec<u32>,
    /// Set a line quantity after all adds, e.g. `--set 1=3`. `0` removes the line.
    #[arg(long = "set", value_name = "ID=QTY")]
    pub set: Vec<String>,
    /// Place the order once the cart is built.
    #[arg(long)]
    pub order: bool,
    /// Fail on unknown product ids instead of skipping them.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type name, e.g. `report`, `adoption-request`, `cart-view`.
    pub type_name: String,
}
