//! Error types for the placement engine.
//!
//! Only genuine failures live here. A transform that leaves the room or
//! touches furniture is an ordinary outcome and is reported through
//! [`crate::room::Violation`] instead.

use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the engine and its host seams
#[derive(Debug, Error)]
pub enum PlacementError {
    /// A 3D asset could not be read or parsed
    #[error("failed to load asset `{path}`: {reason}")]
    AssetLoad { path: PathBuf, reason: String },

    /// The platform refused (or dropped) a hit-test source request
    #[error("hit-test source request failed: {0}")]
    SessionGrant(String),

    /// The room already holds its object
    #[error("`{name}` is already attached to the room")]
    ObjectAlreadyAttached { name: String },
}

impl PlacementError {
    /// Build an [`PlacementError::AssetLoad`] from anything printable
    pub fn asset_load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::AssetLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlacementError>;
