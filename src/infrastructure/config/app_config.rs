//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::args::CliArgs;
use crate::domain::Screen;

pub(crate) const APP_NAME: &str = "dialdesk";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "plantoempower";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, loaded from TOML and overridden by CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Bearer token from the command line or `DIALDESK_TOKEN`. Never written
    /// to the config file.
    #[serde(skip)]
    pub token: Option<String>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Candidate API configuration.
    #[serde(default)]
    pub api: ApiConfig,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Candidate API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Server root, without the `/api` path.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Alert popup duration in seconds.
    #[serde(default = "default_alert_duration")]
    pub alert_duration: u64,

    /// Screen shown after sign-in. Unknown names open the dashboard.
    #[serde(default = "default_start_screen")]
    pub start_screen: String,
}

impl UiConfig {
    #[must_use]
    pub fn start_screen(&self) -> Screen {
        match Screen::parse_or_default(&self.start_screen) {
            Screen::SignIn => Screen::Dashboard,
            screen => screen,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            alert_duration: default_alert_duration(),
            start_screen: default_start_screen(),
        }
    }
}

/// Theme mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Dark mode (default).
    #[default]
    Dark,
    /// Light mode.
    Light,
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,

    /// Theme mode (Dark, Light).
    #[serde(default)]
    pub mode: ThemeMode,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
            mode: ThemeMode::default(),
        }
    }
}

fn default_base_url() -> String {
    crate::infrastructure::api::DEFAULT_API_BASE.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_alert_duration() -> u64 {
    4
}

fn default_start_screen() -> String {
    Screen::Dashboard.slug().to_string()
}

fn default_accent_color() -> String {
    "#4CAF50".to_string()
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(token) = args.token {
            self.token = Some(token);
        }
        if let Some(base_url) = args.api_base_url {
            self.api.base_url = base_url;
        }
        if let Some(timeout) = args.api_timeout {
            self.api.timeout_secs = timeout;
        }
        if let Some(alert_duration) = args.alert_duration {
            self.ui.alert_duration = alert_duration;
        }
        if let Some(start_screen) = args.start_screen {
            self.ui.start_screen = start_screen;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("dialdesk.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            token: None,
            log_level: LogLevel::Info,
            api: ApiConfig::default(),
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
            log_level = "debug"

            [api]
            base_url = "https://crm.example.com"

            [ui]
            start_screen = "contacts"
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.api.base_url, "https://crm.example.com");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.ui.start_screen(), Screen::Contacts);
        assert_eq!(config.ui.alert_duration, 4);
    }

    #[test]
    fn test_start_screen_never_sign_in() {
        let mut ui = UiConfig::default();
        ui.start_screen = "signin".to_string();
        assert_eq!(ui.start_screen(), Screen::Dashboard);

        ui.start_screen = "reports".to_string();
        assert_eq!(ui.start_screen(), Screen::Dashboard);
    }

    #[test]
    fn test_token_never_serialized() {
        let config = AppConfig {
            token: Some("secret".to_string()),
            ..AppConfig::default()
        };
        let rendered = toml::to_string_pretty(&config).unwrap();
        assert!(!rendered.contains("secret"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "dialdesk",
            "--api-base-url",
            "http://10.0.0.5:3000",
            "--alert-duration",
            "7",
            "--log-level",
            "trace",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.api.base_url, "http://10.0.0.5:3000");
        assert_eq!(config.ui.alert_duration, 7);
        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.theme.accent_color, "#4CAF50");
    }
}
