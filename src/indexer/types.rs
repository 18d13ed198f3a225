//! Indexer type definitions.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::MatcherError;

#[derive(Error, Debug)]
pub enum IndexerError {
    /// The project root does not exist or is not a directory
    #[error("Not a directory: {}", .0.display())]
    InvalidPath(PathBuf),
    /// Invalid include or exclude patterns
    #[error(transparent)]
    Matcher(#[from] MatcherError),
}
