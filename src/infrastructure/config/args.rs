use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "dialdesk",
    version,
    about = "A terminal workbench for outbound calling agents",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Bearer token, used when none is stored in the keyring.
    #[arg(long, env = "DIALDESK_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Candidate API server root.
    #[arg(long, value_name = "URL", env = "DIALDESK_API_BASE_URL")]
    pub api_base_url: Option<String>,

    /// Candidate API request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub api_timeout: Option<u64>,

    /// Alert popup duration in seconds.
    #[arg(long, value_name = "SECS")]
    pub alert_duration: Option<u64>,

    /// Screen to open after sign-in.
    #[arg(long, value_name = "SCREEN")]
    pub start_screen: Option<String>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
