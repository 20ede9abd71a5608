use paws_config::PawsConfig;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &PawsConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Serve(args) => commands::serve::handle(&args, config).await,
        Commands::Admin { action } => commands::admin::handle(&action, config, flags),
        Commands::Cart(args) => commands::cart::handle(&args, config, flags),
        Commands::Catalog { action } => commands::catalog::handle(&action, config, flags),
        Commands::Partners { action } => commands::partners::handle(&action, config, flags),
        Commands::Schema(args) => commands::schema::handle(&args, flags),
    }
}
