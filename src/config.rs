use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result};

const ENV_PREFIX: &str = "WORKLOAD_DEMO";
const CONFIG_PATH_VAR: &str = "WORKLOAD_DEMO_CONFIG";

/// `/io_task` never answers sooner than this.
pub const MIN_IO_DELAY_SECS: u64 = 2;
/// `/random_sleep` never waits longer than this.
pub const MAX_RANDOM_SLEEP_SECS: u64 = 5;

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingSection,
    pub workload: WorkloadConfig,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    ///
    /// The file path comes from `WORKLOAD_DEMO_CONFIG` (default `config.toml`)
    /// and is skipped when missing. Environment variables such as
    /// `WORKLOAD_DEMO_SERVER__PORT` override file values.
    pub fn load() -> Result<Self> {
        let config_path = env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| "config.toml".to_string());
        Self::from_sources(Some(Path::new(&config_path)))
    }

    pub fn from_sources(path: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path.filter(|p| p.exists()) {
            builder = builder.add_source(::config::File::from(PathBuf::from(path)));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        config.workload.validate()?;

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

/// Knobs for the simulated workloads.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WorkloadConfig {
    /// How long `/io_task` waits, at least [`MIN_IO_DELAY_SECS`]
    pub io_delay_secs: u64,
    /// Loop count for `/cpu_task`
    pub cpu_iterations: u64,
    /// Upper bound (inclusive) for `/random_sleep`, at most [`MAX_RANDOM_SLEEP_SECS`]
    pub max_random_sleep_secs: u64,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            io_delay_secs: MIN_IO_DELAY_SECS,
            cpu_iterations: 10_000,
            max_random_sleep_secs: MAX_RANDOM_SLEEP_SECS,
        }
    }
}

impl WorkloadConfig {
    pub fn validate(&self) -> Result<()> {
        if self.cpu_iterations == 0 {
            return Err(Error::invalid_config(
                "workload.cpu_iterations must be greater than zero",
            ));
        }
        if self.io_delay_secs < MIN_IO_DELAY_SECS {
            return Err(Error::invalid_config(format!(
                "workload.io_delay_secs must be at least {}",
                MIN_IO_DELAY_SECS
            )));
        }
        if self.max_random_sleep_secs > MAX_RANDOM_SLEEP_SECS {
            return Err(Error::invalid_config(format!(
                "workload.max_random_sleep_secs must be at most {}",
                MAX_RANDOM_SLEEP_SECS
            )));
        }
        Ok(())
    }
}
