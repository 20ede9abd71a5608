use anyhow::Context;
use paws_config::PawsConfig;

/// Load layered configuration, including any `.env` next to the workspace.
pub fn load_config() -> anyhow::Result<PawsConfig> {
    let config = PawsConfig::load_with_dotenv().context("failed to load paws configuration")?;
    tracing::debug!(
        bind = %config.server.bind_address(),
        unknown_id = %config.admin.unknown_id,
        "configuration loaded"
    );
    Ok(config)
}
