use std::fs::{File, ReadDir};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

/// Error that occurs when opening a file fails.
#[derive(Debug, thiserror::Error)]
#[error("failed to open file `{path}`: {source}")]
pub struct FileOpenError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Error that occurs when a directory cannot be listed.
#[derive(Debug, thiserror::Error)]
#[error("failed to open directory `{path}`: {source}")]
pub struct DirOpenError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Opens a file at the given path and wraps it in a [`BufReader`].
///
/// # Errors
///
/// Returns a [`FileOpenError`] if the file cannot be opened.
///
/// # Example
/// ```no_run
/// # use quadlet_inventory::fsutil;
/// let reader = fsutil::open_file_reader("/run/systemd/generator/web.service")?;
/// # Ok::<(), fsutil::FileOpenError>(())
/// ```
pub fn open_file_reader(path: impl AsRef<Path>) -> Result<BufReader<File>, FileOpenError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FileOpenError {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

/// Lists the entries of a directory without recursing.
///
/// # Errors
///
/// Returns a [`DirOpenError`] if the directory does not exist or cannot be read.
pub fn open_dir(path: impl AsRef<Path>) -> Result<ReadDir, DirOpenError> {
    let path = path.as_ref();
    std::fs::read_dir(path).map_err(|source| DirOpenError {
        path: path.to_path_buf(),
        source,
    })
}
