use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::sync::mpsc;

use shopterm::api::StorefrontClient;
use shopterm::catalog::CategoryProvider;
use shopterm::config::Config;
use shopterm::logging::init_tracing;
use shopterm::session::{FileSessionStore, MemorySessionStore, SessionKeeper, SessionStore};
use shopterm::ui::app::App;
use shopterm::ui::events::EventHandler;
use shopterm::ui::TICK_RATE;
use shopterm::worker::{Worker, COMMAND_BUFFER};

#[derive(Parser, Debug)]
#[command(name = "shopterm")]
#[command(version, about = "Browse a storefront from the terminal")]
struct Args {
    /// Config file (default: <config dir>/shopterm/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Storefront API base URL, e.g. http://localhost:5000/api
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Directory holding the saved session
    #[arg(long, value_name = "DIR")]
    session_dir: Option<PathBuf>,

    /// Keep the session in memory only
    #[arg(long)]
    no_persist: bool,

    /// Log file (default: <data dir>/shopterm/shopterm.log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    let log_path = init_tracing(&config.logging).context("Failed to initialize logging")?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.api.base_url,
        log = %log_path.display(),
        "Starting shopterm"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let client = StorefrontClient::new(&config.api).context("Failed to build HTTP client")?;
    let store: Arc<dyn SessionStore> = if args.no_persist {
        Arc::new(MemorySessionStore::new())
    } else {
        let dir = config.session.resolve_dir();
        tracing::debug!(dir = %dir.display(), "Using file session store");
        Arc::new(FileSessionStore::new(dir))
    };
    let sessions = SessionKeeper::new(store);
    let categories = CategoryProvider::new();

    let events = EventHandler::new(TICK_RATE);
    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let worker = Worker::new(
        client,
        categories.clone(),
        sessions.clone(),
        events.sender(),
    );
    runtime.spawn(worker.run(command_rx));

    let app = App::new(config.catalog.clone(), categories, sessions).with_commands(command_tx);
    let result = shopterm::ui::run(app, events);

    runtime.shutdown_timeout(Duration::from_secs(1));
    result.context("Terminal UI failed")?;
    tracing::info!("Exited cleanly");
    Ok(())
}

/// Config file first, then command-line overrides, then validation.
fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(base_url) = &args.base_url {
        config.api.base_url = base_url.clone();
    }
    if let Some(dir) = &args.session_dir {
        config.session.dir = Some(dir.clone());
    }
    if let Some(file) = &args.log_file {
        config.logging.file = Some(file.clone());
    }

    config.validate()?;
    Ok(config)
}
