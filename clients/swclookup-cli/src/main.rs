//! CLI for correlating a stored security event with SWC session and
//! alert data.
//!
//! Running with no arguments performs the entire fixed query sequence
//! against the configured endpoints. Results go to stdout; errors and
//! logs go to stderr, and each failure class has its own exit code.

mod investigate;

use std::path::PathBuf;

use clap::Parser;
use swclookup_core::SwcConfig;

/// Correlate a stored security event with SWC sessions and alerts.
#[derive(Parser, Debug)]
#[command(name = "swclookup", version, about)]
struct Cli {
    /// Path to the config file.
    #[arg(long, default_value = "swclookup.toml")]
    config: PathBuf,

    /// Override the event file path.
    #[arg(long)]
    event: Option<PathBuf>,

    /// Override the API key file path.
    #[arg(long)]
    key_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Logging goes to stderr so stdout stays clean, parseable output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match SwcConfig::load(&cli.config) {
        Ok(mut config) => {
            if let Some(event) = cli.event {
                config.event_path = event;
            }
            if let Some(key_file) = cli.key_file {
                config.api_key_path = key_file;
            }
            config
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    };

    if let Err(e) = investigate::run(&config).await {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
