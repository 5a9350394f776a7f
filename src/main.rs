//! CarAlerts - vehicle-search alerts from the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;

use caralerts_app::config::{self, Settings};
use caralerts_core::prelude::*;

/// CarAlerts - vehicle-search alerts with Telegram notifications
#[derive(Parser, Debug)]
#[command(name = "caralerts")]
#[command(about = "Configure vehicle-search alerts from the terminal", long_about = None)]
struct Args {
    /// Path to a config file (defaults to ~/.config/caralerts/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the backend base URL
    #[arg(long, value_name = "URL")]
    backend_url: Option<String>,

    /// Override the logo dataset URL
    #[arg(long, value_name = "URL")]
    logo_url: Option<String>,

    /// Run the stored alerts once and print the summary as JSON (no TUI)
    #[arg(long)]
    run_search: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    let args = Args::parse();

    // Logging goes to file; the TUI owns stdout.
    caralerts_core::logging::init()?;

    let mut settings = config::load_settings(args.config.as_deref())?;
    if let Some(url) = args.backend_url {
        settings.backend.base_url = url;
    }
    if let Some(url) = args.logo_url {
        settings.logos.dataset_url = url;
    }
    config::validate_settings(&settings)?;

    info!("backend: {}", settings.backend.base_url);

    if args.run_search {
        return run_search_headless(&settings).await;
    }

    let result = caralerts_tui::run(settings).await;
    if let Err(ref e) = result {
        error!("application error: {e:?}");
    }
    result
}

/// Headless mode: invoke the run endpoint once and print the interpreted
/// summary as JSON on stdout.
async fn run_search_headless(settings: &Settings) -> Result<()> {
    let backend = caralerts_api::BackendClient::new(settings.backend.base_url.clone());
    let value = backend.run_search().await?;
    let summary = caralerts_api::parse_run_response(&value, &[]);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
