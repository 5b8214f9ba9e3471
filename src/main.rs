use std::env;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;
use wardrobe::cli::Cli;
use wardrobe_config::Config;

const DEFAULT_LOG_FILTER: &str = if cfg!(debug_assertions) {
    "wardrobe=debug,wardrobe_config=debug"
} else {
    "wardrobe=info,wardrobe_config=info"
};

fn main() -> ExitCode {
    let directives = env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_owned());
    let env_filter = EnvFilter::builder().parse_lossy(directives);
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();

    let cli = Cli::parse();

    let config = match Config::load_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            error!("{err:?}");
            return ExitCode::FAILURE;
        }
    };

    match wardrobe::commands::run(cli.subcommand, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
