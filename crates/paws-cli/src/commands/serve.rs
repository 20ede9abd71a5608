use anyhow::Context;
use paws_config::PawsConfig;
use paws_server::AppState;

use crate::cli::root_commands::ServeArgs;

/// Handle `paws serve`.
pub async fn handle(args: &ServeArgs, config: &PawsConfig) -> anyhow::Result<()> {
    let mut config = config.clone();
    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;

    let state = AppState::from_config(&config);
    paws_server::serve(&config.server, state)
        .await
        .with_context(|| format!("server on {} failed", config.server.bind_address()))
}
