use std::path::PathBuf;

use super::words::SplitError;
use crate::fsutil;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    FileOpen(#[from] fsutil::FileOpenError),
    #[error("failed to read line for file `{path}`: {source}")]
    ReadLine {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to split `Exec` value `{value}` in file `{path}`: {source}")]
    Exec {
        path: PathBuf,
        value: String,
        #[source]
        source: SplitError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
