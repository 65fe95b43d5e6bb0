use std::path::PathBuf;

use clap::Parser;

use fieldpost::config::Config;

#[derive(Parser)]
#[command(name = "fieldpost")]
#[command(about = "Submit photo reports with location details")]
struct Cli {
    /// Path to a JSON config file (defaults to the per-user config directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the upload endpoint URL
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .init();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = args.endpoint {
        config.endpoint = url;
    }

    log::info!("starting fieldpost (endpoint: {})", config.endpoint);
    run(config)
}

#[cfg(feature = "gui")]
fn run(config: Config) -> anyhow::Result<()> {
    fieldpost::gui::run(config)
}

#[cfg(not(feature = "gui"))]
fn run(_config: Config) -> anyhow::Result<()> {
    anyhow::bail!("this build was compiled without the `gui` feature")
}
