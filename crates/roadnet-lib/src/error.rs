use std::path::PathBuf;

use thiserror::Error;

use crate::graph::NodeId;

/// Convenient result alias for the roadnet library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// Raised when the raw dataset does not have the expected element shape.
    #[error("malformed input: {message}")]
    MalformedInput { message: String },

    /// Raised when an origin or destination is not a node of the graph.
    #[error("node {id} does not exist in the graph")]
    InvalidNodeReference { id: NodeId },

    /// Raised when the destination is unreachable from the origin.
    #[error("no path found between {origin} and {destination}")]
    NoPathFound { origin: NodeId, destination: NodeId },

    /// Raised when an algorithm name does not match any supported planner.
    #[error("unknown routing algorithm: {name}")]
    UnknownAlgorithm { name: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::MalformedInput {
            message: error.to_string(),
        }
    }
}
