//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `lamphub.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::Path;
use std::time::Duration;

use lamphub_adapter_virtual::{DistanceSweep, LampConfig};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Simulated firmware settings.
    pub lamp: LampSection,
    /// Synthetic distance sensor.
    pub sensor: SensorConfig,
    /// Static dashboard assets.
    pub dashboard: DashboardSection,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Simulated firmware configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LampSection {
    /// Presence threshold in centimetres.
    pub presence_threshold_cm: f64,
    /// Number of log entries kept.
    pub log_capacity: usize,
    /// Sensor reading before the first observation.
    pub initial_distance_cm: f64,
}

/// Synthetic sensor sweep configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// Feed a triangle-wave distance to the lamp.
    pub sweep_enabled: bool,
    pub sweep_min_cm: f64,
    pub sweep_max_cm: f64,
    pub sweep_step_cm: f64,
    /// Milliseconds between two readings.
    pub sweep_period_ms: u64,
}

/// Dashboard asset configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DashboardSection {
    /// Directory holding the built dashboard, served on unknown paths.
    pub dist_dir: Option<String>,
}

impl Config {
    /// Load configuration from `lamphub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("lamphub.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("LAMPHUB_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("LAMPHUB_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("LAMPHUB_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("LAMPHUB_SENSOR_SWEEP") {
            self.sensor.sweep_enabled = matches!(val.as_str(), "1" | "true" | "yes");
        }
        if let Ok(val) = std::env::var("LAMPHUB_DASHBOARD_DIR") {
            self.dashboard.dist_dir = Some(val);
        }
        if let Ok(val) = std::env::var("LAMPHUB_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.lamp.presence_threshold_cm <= 0.0 {
            return Err(ConfigError::Validation(
                "presence threshold must be positive".to_string(),
            ));
        }
        if self.lamp.log_capacity == 0 {
            return Err(ConfigError::Validation(
                "log capacity must be non-zero".to_string(),
            ));
        }
        if self.sensor.sweep_enabled && self.sensor.sweep_period_ms == 0 {
            return Err(ConfigError::Validation(
                "sweep period must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Settings for the simulated lamp.
    #[must_use]
    pub fn lamp_config(&self) -> LampConfig {
        LampConfig {
            presence_threshold_cm: self.lamp.presence_threshold_cm,
            log_capacity: self.lamp.log_capacity,
            initial_distance_cm: self.lamp.initial_distance_cm,
        }
    }

    /// The sensor sweep and its period, when enabled.
    #[must_use]
    pub fn sweep(&self) -> Option<(DistanceSweep, Duration)> {
        self.sensor.sweep_enabled.then(|| {
            (
                DistanceSweep::new(
                    self.sensor.sweep_min_cm,
                    self.sensor.sweep_max_cm,
                    self.sensor.sweep_step_cm,
                ),
                Duration::from_millis(self.sensor.sweep_period_ms),
            )
        })
    }

    /// Directory of the built dashboard, if configured.
    #[must_use]
    pub fn dashboard_dir(&self) -> Option<&Path> {
        self.dashboard.dist_dir.as_deref().map(Path::new)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "lamphubd=info,lamphub=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for LampSection {
    fn default() -> Self {
        let defaults = LampConfig::default();
        Self {
            presence_threshold_cm: defaults.presence_threshold_cm,
            log_capacity: defaults.log_capacity,
            initial_distance_cm: defaults.initial_distance_cm,
        }
    }
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            sweep_enabled: false,
            sweep_min_cm: 20.0,
            sweep_max_cm: 150.0,
            sweep_step_cm: 10.0,
            sweep_period_ms: 1000,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.lamp.log_capacity, 50);
        assert!(!config.sensor.sweep_enabled);
        assert!(config.dashboard_dir().is_none());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [logging]
            filter = 'debug'

            [lamp]
            presence_threshold_cm = 35.0
            log_capacity = 20
            initial_distance_cm = 80.0

            [sensor]
            sweep_enabled = true
            sweep_min_cm = 10.0
            sweep_max_cm = 90.0
            sweep_step_cm = 5.0
            sweep_period_ms = 250

            [dashboard]
            dist_dir = 'dist'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.lamp_config().log_capacity, 20);
        assert!((config.lamp_config().presence_threshold_cm - 35.0).abs() < f64::EPSILON);
        assert_eq!(config.dashboard_dir(), Some(Path::new("dist")));

        let (mut sweep, period) = config.sweep().unwrap();
        assert_eq!(period, Duration::from_millis(250));
        assert_eq!(sweep.next(), Some(90.0));
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_non_positive_threshold() {
        let mut config = Config::default();
        config.lamp.presence_threshold_cm = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_log_capacity() {
        let mut config = Config::default();
        config.lamp.log_capacity = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_sweep_period_only_when_enabled() {
        let mut config = Config::default();
        config.sensor.sweep_period_ms = 0;
        assert!(config.validate().is_ok());
        config.sensor.sweep_enabled = true;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_defaults() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn should_skip_sweep_when_disabled() {
        assert!(Config::default().sweep().is_none());
    }

    #[test]
    fn should_format_bind_addr() {
        let mut config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9090;
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [server]
            port = 8000
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.lamp.log_capacity, 50);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
