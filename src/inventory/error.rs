use std::path::PathBuf;

use crate::{fsutil, unit};

/// Errors that may occur while scanning a generator directory.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("generator directory or unit not found: {0}")]
    DirectoryNotFound(#[from] fsutil::DirOpenError),
    #[error("failed to read entry of directory `{path}`: {source}")]
    ReadEntry {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Unit(#[from] unit::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
