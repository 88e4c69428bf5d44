use std::path::Path;

use super::{Error, Inventory, Result, SERVICE_SUFFIX};
use crate::fsutil;
use crate::unit::UnitFields;

/// Builds an [`Inventory`] from the service units in a generator directory.
///
/// Only the top level of `dir` is listed. Entries not ending in `.service` are
/// ignored, as are directories. An empty directory yields an empty inventory.
///
/// # Errors
///
/// - [`Error::DirectoryNotFound`] if `dir` doesn't exist or can't be opened.
/// - [`Error::ReadEntry`] if listing the directory fails midway.
/// - [`Error::Unit`] if a unit file can't be read. No partial inventory is returned.
///
/// # Example
///
/// ```no_run
/// use quadlet_inventory::generator::{self, GeneratorScope};
/// use quadlet_inventory::inventory;
///
/// let dir = generator::generator_dir(GeneratorScope::User).unwrap();
/// let inventory = inventory::scan(dir).unwrap();
/// println!("{} containers", inventory.containers.len());
/// ```
pub fn scan(dir: impl AsRef<Path>) -> Result<Inventory> {
    let dir = dir.as_ref();
    let entries = fsutil::open_dir(dir)?;
    let mut inventory = Inventory::new();

    for entry in entries {
        let entry = entry.map_err(|source| Error::ReadEntry {
            path: dir.to_path_buf(),
            source,
        })?;
        let file_name = entry.file_name();
        let Some(unit_name) = file_name.to_str() else {
            log::warn!("Skipping non UTF-8 entry {:?} in `{}`", file_name, dir.display());
            continue;
        };

        if !unit_name.ends_with(SERVICE_SUFFIX) {
            continue;
        }

        let path = entry.path();
        if path.is_dir() {
            log::debug!("Skipping directory `{}`", path.display());
            continue;
        }

        let fields = UnitFields::from_path(&path)?;
        inventory.classify_and_insert(unit_name, fields);
    }

    log::debug!(
        "Scanned `{}`: {} pods, {} containers",
        dir.display(),
        inventory.pods.len(),
        inventory.containers.len()
    );
    Ok(inventory)
}
