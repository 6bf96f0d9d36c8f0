//! Configuration System
//!
//! Resolves the bootstrap configuration once at startup. Defaults come from
//! the build profile, `WAYVR_DASHBOARD_*` variables captured at compile time
//! override them, and a JSON blob in local storage can override both.

use serde::Deserialize;

/// Local storage key holding a JSON config override
pub const CONFIG_STORAGE_KEY: &str = "wayvr_dashboard_config";

/// Id of the host page element the dashboard mounts into
pub const DEFAULT_MOUNT_ID: &str = "root";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "default_mode")]
    pub mode: RunMode,

    #[serde(default = "default_mount_id")]
    pub mount_id: String,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Development vs production build behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    Development,
    Production,
}

impl RunMode {
    /// Parse a mode name, accepting the short forms `dev` and `prod`
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" => Some(Self::Development),
            "prod" | "production" => Some(Self::Production),
            _ => None,
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

fn default_mode() -> RunMode {
    option_env!("WAYVR_DASHBOARD_MODE")
        .and_then(RunMode::parse)
        .unwrap_or(if cfg!(debug_assertions) {
            RunMode::Development
        } else {
            RunMode::Production
        })
}

fn default_mount_id() -> String {
    DEFAULT_MOUNT_ID.to_string()
}

/// Global `error` / `unhandledrejection` forwarding
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DiagnosticsConfig {
    #[serde(default = "default_diagnostics_enabled")]
    pub enabled: bool,

    #[serde(default = "default_capture_rejections")]
    pub capture_rejections: bool,
}

fn default_diagnostics_enabled() -> bool {
    option_env!("WAYVR_DASHBOARD_DIAGNOSTICS")
        .and_then(parse_flag)
        .unwrap_or(cfg!(feature = "diagnostics"))
}

fn default_capture_rejections() -> bool {
    true
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            enabled: default_diagnostics_enabled(),
            capture_rejections: default_capture_rejections(),
        }
    }
}

/// Logging configuration
///
/// Without an explicit level the resolved run mode decides: `debug` in
/// development, `info` in production.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: Option<String>,
}

fn default_log_level() -> Option<String> {
    option_env!("WAYVR_DASHBOARD_LOG").map(str::to_string)
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    /// Maximum tracing level; missing or unknown names use the mode default
    pub fn max_level(&self, mode: RunMode) -> tracing::Level {
        self.level
            .as_deref()
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or(match mode {
                RunMode::Development => tracing::Level::DEBUG,
                RunMode::Production => tracing::Level::INFO,
            })
    }
}

impl Config {
    /// Configuration from the build profile and compile-time environment
    pub fn from_build() -> Self {
        Self {
            mode: default_mode(),
            mount_id: default_mount_id(),
            diagnostics: DiagnosticsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Parse a JSON override; missing fields keep their build defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            key: CONFIG_STORAGE_KEY.to_string(),
            error: e.to_string(),
        })
    }

    /// Log level after applying the resolved run mode
    pub fn max_log_level(&self) -> tracing::Level {
        self.logging.max_level(self.mode)
    }

    /// Build defaults, overridden by the local storage blob when present
    pub fn load() -> Result<Self, ConfigError> {
        match read_stored_config() {
            Some(json) => Self::from_json(&json),
            None => Ok(Self::from_build()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_build()
    }
}

fn read_stored_config() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(CONFIG_STORAGE_KEY).ok()?
}

/// Parse a boolean switch such as `1`, `true`, `on` or `no`
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config from {key}: {error}")]
    Parse { key: String, error: String },
}
