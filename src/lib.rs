//! Quadlet Inventory: lists the pods and containers that the podman systemd generator
//! produced from quadlet files.
//!
//! The library reads a generator output directory, extracts the quadlet related keys
//! from each `.service` unit and reports pods and containers keyed by unit filename,
//! so consumers can match them against systemd services without re-running the
//! generator.
pub mod error;
pub mod fsutil;
pub mod generator;
pub mod inventory;
pub mod unit;

use std::ffi::OsString;
use std::io::Write;

pub use error::{Error, Result};
pub use inventory::Inventory;

/// Runs the inventory for the given command line arguments, without the program name.
///
/// Exactly one argument, the generator directory, is accepted. On success the
/// inventory is written to `out` as a single line of JSON. Nothing is written on
/// failure.
///
/// # Errors
///
/// - [`Error::Usage`] if not exactly one argument was given.
/// - [`Error::Inventory`] if the directory or one of its units can't be read.
/// - [`Error::Serialize`] or [`Error::Write`] if producing the output fails.
pub fn run<I, W>(args: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = OsString>,
    W: Write,
{
    let mut args = args.into_iter();
    let (Some(generator_dir), None) = (args.next(), args.next()) else {
        return Err(Error::Usage);
    };
    log::debug!("Generator directory: {}", generator_dir.to_string_lossy());

    let inventory = inventory::scan(&generator_dir)?;
    log_unresolved_pods(&inventory);
    let mut json = serde_json::to_string(&inventory)?;
    json.push('\n');

    out.write_all(json.as_bytes()).map_err(Error::Write)?;
    out.flush().map_err(Error::Write)
}

/// Reports containers whose `Pod` matches no pod of the inventory. Such references are
/// kept as they are.
fn log_unresolved_pods(inventory: &Inventory) -> usize {
    let mut unresolved = 0;
    for (unit_name, container) in &inventory.containers {
        if let Some(pod) = container.pod.as_deref() {
            if inventory.resolve_pod(container).is_none() {
                log::debug!("Container `{unit_name}` refers to unknown pod `{pod}`");
                unresolved += 1;
            }
        }
    }
    unresolved
}
