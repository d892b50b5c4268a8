//! Engine-boundary error type.

use nodo_client::ClientError;
use thiserror::Error;

/// A failed sync operation, flattened to a human-readable message.
///
/// The engine does not distinguish failure causes; every transport error is
/// uniformly "do not update state". The richer [`ClientError`] taxonomy stops
/// at this boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SyncError {
    pub message: String,
}

impl SyncError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<ClientError> for SyncError {
    fn from(err: ClientError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}
