//! Error types for workload-demo

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid status distribution: {0}")]
    InvalidDistribution(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
}

impl Error {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }

    pub fn invalid_distribution(msg: impl Into<String>) -> Self {
        Error::InvalidDistribution(msg.into())
    }
}
