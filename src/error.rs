//! Error types for floodpath

use thiserror::Error;

/// Floodpath error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load surface: {0}")]
    FieldLoad(String),

    #[error("Region contains no grid points: {0}")]
    RegionEmpty(String),

    #[error("No path between waypoints: {0}")]
    Disconnected(String),

    #[error("Need at least two waypoints, got {0}")]
    InsufficientWaypoints(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
