//! sift - Entry Point

use clap::Parser;
use sift::client::{DispatchMode, Dispatcher, HttpBackend};
use sift::model::AppError;
use sift::state::AppState;
use sift::store::{open_or_fallback, SuggestionStore};
use sift::view::ColorConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// sift - terminal search console with history-aware autocomplete
#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(version)]
#[command(about = "Terminal search console for a document search service")]
pub struct Args {
    /// Base URL of the search service
    #[arg(long)]
    pub server: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path of the storage file holding search history and theme
    #[arg(long)]
    pub storage: Option<PathBuf>,

    /// Run this search on startup
    #[arg(short, long)]
    pub search: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = sift::config::load_config_with_precedence(args.config.clone())?;
        let merged = sift::config::merge_config(config_file);
        let with_env = sift::config::apply_env_overrides(merged);
        sift::config::apply_cli_overrides(with_env, args.server.clone(), args.storage.clone())
    };

    sift::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let history = SuggestionStore::load(open_or_fallback(&config.storage_path));
    let app_state = AppState::new(history, config.debounce());

    let backend = HttpBackend::new(&config.server_url, config.request_timeout())?;
    let dispatcher = Dispatcher::new(Arc::new(backend), DispatchMode::Threaded);

    let colors = ColorConfig::from_env_and_args(args.no_color);

    sift::view::run(app_state, dispatcher, colors, args.search.as_deref())?;

    info!("Exiting");
    Ok(())
}
