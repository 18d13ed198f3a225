use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing a catalog.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
