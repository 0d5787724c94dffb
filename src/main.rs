use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use dialdesk::infrastructure::{
    AppConfig, CandidateApiClient, CliArgs, KeyringTokenStorage, SessionTokenStore,
    SettingsState, StaticDirectory, StorageManager, SystemIntents,
};
use dialdesk::presentation::App;
use dialdesk::presentation::theme::Theme;
use dialdesk::presentation::ui::{AppDependencies, AppOptions};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn create_app() -> Result<(App, Option<String>)> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    init_logging(&config)?;

    info!(version = dialdesk::VERSION, base_url = %config.api.base_url, "Starting dialdesk");

    let api_client = Arc::new(CandidateApiClient::with_base_url(
        config.api.base_url.clone(),
        Duration::from_secs(config.api.timeout_secs),
    )?);
    let token_store = Arc::new(SessionTokenStore::new(Arc::new(KeyringTokenStorage::new())));

    let settings = storage.load_settings().unwrap_or_else(|e| {
        warn!(error = %e, "Could not read saved settings, using defaults");
        SettingsState::default()
    });

    let deps = AppDependencies {
        profile_port: api_client,
        token_store,
        directory: Arc::new(StaticDirectory::demo()),
        intents: Arc::new(SystemIntents::new()),
        storage,
    };
    let options = AppOptions {
        theme: Theme::from_config(&config.theme),
        alert_duration: Duration::from_secs(config.ui.alert_duration),
        start_screen: config.ui.start_screen(),
        settings,
    };

    Ok((App::new(deps, options), config.token.clone()))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let (app, cli_token) = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal, cli_token).await;

    ratatui::restore();

    result
}
