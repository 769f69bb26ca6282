//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::ApiConfig;
use crate::chart::{is_valid_target, ChartStyle, DEFAULT_CHART_TARGET, DEFAULT_LIBRARY_URL};
use crate::dashboard::ControllerConfig;
use crate::summary::{BackendConfig, PeriodKey};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub dashboard: DashboardSettings,

    #[serde(default)]
    pub chart: ChartSettings,

    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Summary backend connection
#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    #[serde(default = "default_backend_url")]
    pub url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_method")]
    pub method: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default)]
    pub session_id: Option<String>,
}

fn default_backend_url() -> String {
    "http://localhost:8069".to_string()
}

fn default_model() -> String {
    "twh.dashboard".to_string()
}

fn default_method() -> String {
    "get_dashboard_summary".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            model: default_model(),
            method: default_method(),
            request_timeout_secs: default_request_timeout(),
            session_id: None,
        }
    }
}

impl BackendSettings {
    pub fn backend_config(&self) -> BackendConfig {
        BackendConfig {
            url: self.url.clone(),
            model: self.model.clone(),
            method: self.method.clone(),
            request_timeout_ms: self.request_timeout_secs.saturating_mul(1000),
            session_id: self.session_id.clone().filter(|s| !s.is_empty()),
        }
    }
}

/// Dashboard controller behavior
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardSettings {
    #[serde(default)]
    pub default_period: PeriodKey,

    #[serde(default = "default_discard_stale")]
    pub discard_stale_responses: bool,
}

fn default_discard_stale() -> bool {
    true
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            default_period: PeriodKey::Month,
            discard_stale_responses: default_discard_stale(),
        }
    }
}

impl DashboardSettings {
    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            default_period: self.default_period.clone(),
            discard_stale_responses: self.discard_stale_responses,
        }
    }
}

/// Sales chart output
#[derive(Debug, Clone, Deserialize)]
pub struct ChartSettings {
    #[serde(default = "default_target")]
    pub target: String,

    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    #[serde(default = "default_library_url")]
    pub library_url: String,

    #[serde(default = "default_chart_height")]
    pub height: u32,

    #[serde(default = "default_series_name")]
    pub series_name: String,

    #[serde(default = "default_color")]
    pub color: String,
}

fn default_target() -> String {
    DEFAULT_CHART_TARGET.to_string()
}

fn default_output_dir() -> String {
    dirs::data_local_dir()
        .map(|p| p.join("twh-dashboard").join("charts").to_string_lossy().to_string())
        .unwrap_or_else(|| "./twh_dashboard_charts".to_string())
}

fn default_library_url() -> String {
    DEFAULT_LIBRARY_URL.to_string()
}

fn default_chart_height() -> u32 {
    ChartStyle::default().height
}

fn default_series_name() -> String {
    ChartStyle::default().series_name
}

fn default_color() -> String {
    ChartStyle::default().color
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            target: default_target(),
            output_dir: default_output_dir(),
            library_url: default_library_url(),
            height: default_chart_height(),
            series_name: default_series_name(),
            color: default_color(),
        }
    }
}

impl ChartSettings {
    pub fn style(&self) -> ChartStyle {
        ChartStyle {
            height: self.height,
            series_name: self.series_name.clone(),
            color: self.color.clone(),
        }
    }
}

/// Host shell API server
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8090
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ApiSettings {
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            host: self.host.clone(),
            port: self.port,
            cors_origins: self.cors_origins.clone(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.validate().map_err(|error| ConfigError::Invalid {
            path: path.to_path_buf(),
            error,
        })?;

        Ok(config)
    }

    /// Check values that end up in file names or page markup
    pub fn validate(&self) -> Result<(), String> {
        if !is_valid_target(&self.chart.target) {
            return Err(format!(
                "chart.target {:?} must use only ASCII letters, digits, '_' or '-'",
                self.chart.target
            ));
        }
        Ok(())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("twh-dashboard").join("config.toml")),
            Some(PathBuf::from("/etc/twh-dashboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path_opt in config_paths.iter().flatten() {
            if path_opt.exists() {
                match Self::load_with_env(path_opt) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path_opt);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path_opt, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        // Backend overrides
        if let Ok(url) = std::env::var("TWH_BACKEND_URL") {
            self.backend.url = url;
        }
        if let Ok(session) = std::env::var("TWH_BACKEND_SESSION") {
            self.backend.session_id = Some(session);
        }

        // Dashboard overrides
        if let Ok(period) = std::env::var("TWH_DEFAULT_PERIOD") {
            self.dashboard.default_period = PeriodKey::from(period);
        }

        // Chart overrides
        if let Ok(dir) = std::env::var("TWH_CHART_OUTPUT_DIR") {
            self.chart.output_dir = dir;
        }

        // API overrides
        if let Ok(host) = std::env::var("TWH_API_HOST") {
            self.api.host = host;
        }
        if let Ok(port) = std::env::var("TWH_API_PORT") {
            if let Ok(p) = port.parse() {
                self.api.port = p;
            }
        }

        // Logging overrides
        if let Ok(level) = std::env::var("TWH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("TWH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid config file {path:?}: {error}")]
    Invalid { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r##"# TWH Dashboard Configuration
#
# Environment variables override these settings:
# - TWH_BACKEND_URL
# - TWH_BACKEND_SESSION
# - TWH_DEFAULT_PERIOD
# - TWH_CHART_OUTPUT_DIR
# - TWH_API_HOST
# - TWH_API_PORT
# - TWH_LOG_LEVEL
# - TWH_LOG_FORMAT

[backend]
# Backend base URL
url = "http://localhost:8069"

# Model and method answering the summary call
model = "twh.dashboard"
method = "get_dashboard_summary"

# Request timeout in seconds
request_timeout_secs = 30

# Optional session cookie value
# session_id = ""

[dashboard]
# Revenue period loaded at startup: month, year or all
default_period = "month"

# Drop responses that arrive after a newer request was issued
discard_stale_responses = true

[chart]
# Element handle of the sales chart
target = "twh_sales_chart"

# Directory receiving rendered chart pages
output_dir = "./twh_dashboard_charts"

# ApexCharts bundle loaded by the chart page
library_url = "https://cdn.jsdelivr.net/npm/apexcharts"

height = 350
series_name = "Penjualan"
color = "#4e73df"

[api]
# Host shell API host
host = "127.0.0.1"

# Host shell API port
port = 8090

# Allowed CORS origins (empty = any)
cors_origins = []

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/twh-dashboard/twh-dashboard.log"
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_template_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.backend.url, "http://localhost:8069");
        assert_eq!(config.dashboard.default_period, PeriodKey::Month);
        assert!(config.dashboard.discard_stale_responses);
        assert_eq!(config.chart.target, "twh_sales_chart");
        assert_eq!(config.chart.color, "#4e73df");
        assert_eq!(config.api.port, 8090);
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_load_partial_file_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[backend]\nurl = \"http://erp.example:8069\"\nsession_id = \"abc\"\n\n[dashboard]\ndefault_period = \"year\""
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.backend.url, "http://erp.example:8069");
        assert_eq!(config.backend.model, "twh.dashboard");
        assert_eq!(config.dashboard.default_period, PeriodKey::Year);
        assert_eq!(config.chart.height, 350);

        let backend = config.backend.backend_config();
        assert_eq!(backend.request_timeout_ms, 30_000);
        assert_eq!(backend.session_id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_unknown_period_passes_through() {
        let config: Config = toml::from_str("[dashboard]\ndefault_period = \"quarter\"").unwrap();
        assert_eq!(
            config.dashboard.controller_config().default_period,
            PeriodKey::Other("quarter".to_string())
        );
    }

    #[test]
    fn test_empty_session_is_ignored() {
        let config: Config = toml::from_str("[backend]\nsession_id = \"\"").unwrap();
        assert!(config.backend.backend_config().session_id.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/twh-dashboard.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_rejects_unsafe_chart_target() {
        for target in ["../../etc/twh", "chart\\\"x", "</script>"] {
            let mut file = NamedTempFile::new().unwrap();
            writeln!(file, "[chart]\ntarget = '{}'", target).unwrap();

            let err = Config::load(file.path()).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { .. }), "{target:?}");
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nport = \"not a port\"").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
