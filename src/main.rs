use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use taskdeck::config::Config;
use taskdeck::logger::{self, Logger};
use taskdeck::session::{FileSessionStore, SessionContext};
use taskdeck::ui::{self, core::AppContext, Route, RunOptions};

#[derive(Parser)]
#[command(name = "taskdeck")]
#[command(about = "Terminal client for managing projects and their tasks", long_about = None)]
struct Cli {
    /// Configuration file to use instead of the default locations
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the service, overrides the configuration
    #[arg(long)]
    api_url: Option<String>,

    /// Route to open on startup, e.g. "/projects/3/tasks"
    #[arg(long)]
    route: Option<String>,

    /// Write a default configuration file and exit
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    generate_config: Option<Option<PathBuf>>,

    /// Forget the stored session and exit
    #[arg(long)]
    logout: bool,

    /// Keep the session in memory only; nothing is read from or written to disk
    #[arg(long, conflicts_with = "logout")]
    ephemeral: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.generate_config {
        let path = match path {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    // File, then TASKDECK_API_URL, then --api-url.
    let mut config = Config::load_from(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
        config.validate()?;
    }

    let session = if cli.ephemeral {
        SessionContext::in_memory()
    } else {
        let session_dir = config.session_dir()?;
        let session = SessionContext::new(Arc::new(FileSessionStore::new(&session_dir)));
        if cli.logout {
            session
                .logout()
                .with_context(|| format!("Failed to clear session in {}", session_dir.display()))?;
            println!("{}", taskdeck::constants::SUCCESS_SIGNED_OUT);
            return Ok(());
        }
        session
    };

    let log_buffer = Logger::new();
    logger::init(&config.logging, &log_buffer)?;
    log::info!("Starting taskdeck against {}", config.api.base_url);

    let start_route = match &cli.route {
        Some(path) => Route::parse(path),
        None => config.start_route(),
    };

    let (dialogs, dialog_host) = taskdeck::dialog::channel();
    let ctx = AppContext::new(&config.api.base_url, session, dialogs, log_buffer);

    ui::run_app(
        ctx,
        dialog_host,
        RunOptions {
            start_route,
            mouse_enabled: config.ui.mouse_enabled,
        },
    )
    .await
}
