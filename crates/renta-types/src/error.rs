//! Error types for the rental desk

use thiserror::Error;

use crate::Money;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Snapshot-related errors
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),

    #[error("Snapshot data corrupted: {0}")]
    Corrupted(String),

    #[error("Snapshot IO error: {0}")]
    IoError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("Vehicle not found: {0}")]
    VehicleNotFound(String),

    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Money, available: Money },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;
