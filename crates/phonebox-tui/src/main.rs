//! Phonebox TUI entry point.

use std::{fs::File, path::PathBuf, sync::Mutex};

use clap::Parser;
use phonebox_host::SystemEnv;
use phonebox_tui::{Runtime, RuntimeConfig, TerminalDriver};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Phonebox terminal phone overlay
#[derive(Parser, Debug)]
#[command(name = "phonebox")]
#[command(about = "Terminal phone overlay driven by a host process")]
#[command(version)]
struct Args {
    /// Host base URL (overrides PHONEBOX_ENDPOINT)
    #[arg(long)]
    endpoint: Option<String>,

    /// Host resource name (overrides PHONEBOX_RESOURCE)
    #[arg(long)]
    resource: Option<String>,

    /// Address to accept host messages on
    #[arg(long, default_value = phonebox_tui::config::DEFAULT_LISTEN)]
    listen: String,

    /// Write logs to this file
    ///
    /// Without it no logs are written, since the terminal belongs to the UI.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
        let file = File::create(path)?;

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
            .with(filter)
            .init();
    }

    let mut config = RuntimeConfig { listen: args.listen, ..RuntimeConfig::default() };
    if let Some(endpoint) = args.endpoint {
        config.host.endpoint = endpoint;
    }
    if let Some(resource) = args.resource {
        config.host.resource = resource;
    }

    tracing::info!(
        endpoint = %config.host.endpoint,
        resource = %config.host.resource,
        listen = %config.listen,
        "starting phonebox"
    );

    let driver = TerminalDriver::new(&config).await?;
    Runtime::new(driver, SystemEnv::new(), config.timers).run().await?;

    Ok(())
}
