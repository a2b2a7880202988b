//! Error types for NWM data discovery.

use thiserror::Error;

/// Result type for explorer operations.
pub type ExplorerResult<T> = Result<T, ExplorerError>;

/// Errors raised while discovering NWM data.
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// The requested explorer is not in the registry
    #[error("Unknown explorer type '{name}' (known: {known})")]
    UnknownExplorer { name: String, known: String },

    /// The address cannot be used by the selected explorer
    #[error("Invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Directory index request returned a non-success status
    #[error("Listing {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error while walking a local mirror
    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// Background discovery task failed
    #[error("Discovery task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
