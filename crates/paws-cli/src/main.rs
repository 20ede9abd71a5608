use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod output;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("paws error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(log_level(cli.quiet, cli.verbose, &cli.command))?;

    let flags = cli.global_flags();
    ui::init(&flags);

    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args, &flags);
    }

    let config = bootstrap::load_config()?;
    commands::dispatch::dispatch(cli.command, &config, &flags).await
}

/// `serve` logs at `info` so the listen address and delivered notifications
/// show up; one-shot commands stay at `warn` to keep stdout output clean.
const fn log_level(quiet: bool, verbose: bool, command: &cli::Commands) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else if matches!(command, cli::Commands::Serve(_)) {
        "info"
    } else {
        "warn"
    }
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("PAWS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    fn level_for(args: &[&str]) -> &'static str {
        let cli = cli::Cli::try_parse_from(args).expect("cli should parse");
        log_level(cli.quiet, cli.verbose, &cli.command)
    }

    #[test]
    fn serve_defaults_to_info() {
        assert_eq!(level_for(&["paws", "serve"]), "info");
        assert_eq!(level_for(&["paws", "serve", "--quiet"]), "error");
        assert_eq!(level_for(&["paws", "serve", "--verbose"]), "debug");
    }

    #[test]
    fn one_shot_commands_default_to_warn() {
        assert_eq!(level_for(&["paws", "catalog", "products"]), "warn");
        assert_eq!(level_for(&["paws", "partners", "list"]), "warn");
    }
}
