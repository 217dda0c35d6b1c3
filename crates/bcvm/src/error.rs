//! Error types for the facade.

use std::path::PathBuf;

use bcvm_core::{LoadError, ParseError};
use bcvm_vm::RuntimeError;
use thiserror::Error;

/// Anything that can go wrong between source text and a finished run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Errors that can occur when loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("'{field}' in {path} must be at least 1")]
    InvalidLimit { path: PathBuf, field: &'static str },
}
