use std::path::PathBuf;

use thiserror::Error;

use crate::search::EngineState;

/// Convenient result alias for the labyrinth library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a maze source or programmatic grid is structurally invalid.
    #[error("malformed maze: {reason}")]
    MalformedMaze { reason: String },

    /// Raised when `pop` is called on an empty frontier. Indicates a caller bug.
    #[error("cannot pop from an empty frontier")]
    EmptyFrontier,

    /// Raised when every reachable state was expanded without reaching the goal.
    #[error("no solution: goal is unreachable after exploring {explored} states")]
    NoSolution { explored: usize },

    /// Raised when `solve` is invoked on an engine that already ran.
    #[error("search engine already ran (state: {state}); create a new engine to search again")]
    EngineSpent { state: EngineState },

    /// Raised when raster export settings cannot produce a sensible image.
    #[error("invalid image options: {message}")]
    InvalidImageOptions { message: String },

    /// Raised when reading a maze file fails.
    #[error("failed to read maze from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for PNG encoding and file errors during raster export.
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedMaze {
            reason: reason.into(),
        }
    }
}
