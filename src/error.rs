use crate::inventory;

/// Exit code for a successful run.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for usage errors and failures while reading units.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code when the generator directory can't be scanned.
pub const EXIT_DIRECTORY_NOT_FOUND: i32 = 2;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing required generator dir argument")]
    Usage,
    #[error(transparent)]
    Inventory(#[from] inventory::Error),
    #[error("failed to serialize inventory: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write inventory: {0}")]
    Write(#[source] std::io::Error),
}

impl Error {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Inventory(
                inventory::Error::DirectoryNotFound(_) | inventory::Error::ReadEntry { .. },
            ) => EXIT_DIRECTORY_NOT_FOUND,
            Error::Usage
            | Error::Inventory(inventory::Error::Unit(_))
            | Error::Serialize(_)
            | Error::Write(_) => EXIT_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
