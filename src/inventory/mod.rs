//! Classification of generated units into pods and containers.
//!
//! Each `.service` file whose `SourcePath` points at a `.pod` or `.container` quadlet
//! becomes one record keyed by the unit filename. Everything else is skipped.
mod error;
mod scan;

use std::collections::BTreeMap;
use std::path::Path;

pub use error::{Error, Result};
pub use scan::scan;

use crate::unit::UnitFields;

const SERVICE_SUFFIX: &str = ".service";
const POD_SERVICE_SUFFIX: &str = "-pod.service";
const POD_SOURCE_SUFFIX: &str = ".pod";
const CONTAINER_SOURCE_SUFFIX: &str = ".container";
const GENERATED_NAME_PREFIX: &str = "systemd-";

/// A pod generated from a `.pod` quadlet.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PodRecord {
    pub source_path: String,
    pub name: String,
}

/// A container generated from a `.container` quadlet.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ContainerRecord {
    pub source_path: String,
    pub name: String,
    pub exec: Option<Vec<String>>,
    pub image: Option<String>,
    /// Unit filename of the owning pod. Never checked against [`Inventory::pods`].
    pub pod: Option<String>,
}

/// Pods and containers found in one generator directory, keyed by unit filename.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Inventory {
    pub pods: BTreeMap<String, PodRecord>,
    pub containers: BTreeMap<String, ContainerRecord>,
}

/// Returns the name podman gives a container or pod.
///
/// A declared name is returned unchanged. Otherwise the name is built the way the
/// generator does it: the `-pod.service` (or else `.service`) suffix is removed from
/// the unit filename and `systemd-` is prepended.
///
/// ```
/// # use quadlet_inventory::inventory::derive_name;
/// assert_eq!(derive_name("myapp-pod.service", None), "systemd-myapp");
/// assert_eq!(derive_name("myapp.service", None), "systemd-myapp");
/// assert_eq!(derive_name("myapp.service", Some("web")), "web");
/// ```
pub fn derive_name(unit_name: &str, declared_name: Option<&str>) -> String {
    if let Some(name) = declared_name {
        return name.to_owned();
    }

    let stem = unit_name
        .strip_suffix(POD_SERVICE_SUFFIX)
        .or_else(|| unit_name.strip_suffix(SERVICE_SUFFIX))
        .unwrap_or(unit_name);
    format!("{GENERATED_NAME_PREFIX}{stem}")
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies one unit by the suffix of its `SourcePath` and records it.
    ///
    /// Units without a `SourcePath`, or whose source is neither a `.pod` nor a
    /// `.container` file, are skipped. Returns whether a record was inserted.
    pub fn classify_and_insert(&mut self, unit_name: &str, fields: UnitFields) -> bool {
        let UnitFields {
            source_path,
            name,
            exec,
            image,
            pod,
        } = fields;

        let Some(source_path) = source_path else {
            log::debug!("Skipping `{unit_name}`: no SourcePath");
            return false;
        };

        let name = derive_name(unit_name, name.as_deref());
        if source_path.ends_with(POD_SOURCE_SUFFIX) {
            log::debug!("Found pod `{name}` in `{unit_name}` from `{source_path}`");
            self.pods
                .insert(unit_name.to_owned(), PodRecord { source_path, name });
        } else if source_path.ends_with(CONTAINER_SOURCE_SUFFIX) {
            log::debug!("Found container `{name}` in `{unit_name}` from `{source_path}`");
            self.containers.insert(
                unit_name.to_owned(),
                ContainerRecord {
                    source_path,
                    name,
                    exec,
                    image,
                    pod,
                },
            );
        } else {
            log::debug!("Skipping `{unit_name}`: unsupported source `{source_path}`");
            return false;
        }

        true
    }

    /// Looks up the pod a container refers to.
    ///
    /// The container's `pod` value may name either the pod's unit file
    /// (`mypod-pod.service`) or its quadlet file (`mypod.pod`). Returns the pod's unit
    /// filename together with its record, or `None` if nothing matches.
    pub fn resolve_pod(&self, container: &ContainerRecord) -> Option<(&str, &PodRecord)> {
        let reference = container.pod.as_deref()?;
        if let Some((unit_name, pod)) = self.pods.get_key_value(reference) {
            return Some((unit_name.as_str(), pod));
        }

        self.pods
            .iter()
            .find(|(_, pod)| {
                Path::new(&pod.source_path)
                    .file_name()
                    .is_some_and(|file_name| file_name == reference)
            })
            .map(|(unit_name, pod)| (unit_name.as_str(), pod))
    }

    pub fn is_empty(&self) -> bool {
        self.pods.is_empty() && self.containers.is_empty()
    }
}
