//! Configuration loading errors.

use super::error_code::{self, GateErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Cannot read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config value for {field}: {message}")]
    Invalid { field: &'static str, message: String },
}

impl GateErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(_) => error_code::CONFIG_PARSE,
            Self::Io { .. } => error_code::CONFIG_IO,
            Self::Invalid { .. } => error_code::CONFIG_INVALID,
        }
    }
}
