//! Application service: which known instances are actually installed.

use crate::application::ports::LocalFs;
use crate::domain::{Instance, InstanceLayout};

/// Return the known instances whose executable exists, in apply order.
///
/// Callers must not assume every instance is present: either, both or
/// neither may be installed.
pub fn list_installed_instances(fs: &impl LocalFs, layout: &InstanceLayout) -> Vec<Instance> {
    layout
        .known_instances()
        .into_iter()
        .filter(|instance| fs.exists(&instance.executable()))
        .collect()
}
