//! CLI error type.

use thiserror::Error;

use homestead_core::StoreError;

use crate::client::ClientError;

/// Errors that can end a CLI command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Talking to the listing service failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Local favorites storage failed.
    #[error("favorites storage error: {0}")]
    Store(#[from] StoreError),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A listing file did not contain a valid create payload.
    #[error("invalid listing file: {0}")]
    InvalidPayload(String),

    /// No favorites path was given and no data directory could be found.
    #[error("cannot locate a data directory; pass --store or set HOMESTEAD_FAVORITES_PATH")]
    NoDataDir,
}
