use serde::{Deserialize, Serialize};

pub mod cpu;
pub mod disk;
pub mod load;
pub mod memory;


#[derive(Debug, Clone)]
pub struct AllowedResources {
    pub mount_points: Vec<String>,
}


/// Fallback values for snapshot groups the poller did not deliver, one
/// default per field. Configurable through the `[DEFAULTS]` config section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SnapshotDefaults {
    #[serde(default)]
    pub cpu_percent: cpu::CpuTimes,
    #[serde(default)]
    pub memory: memory::MemoryUsage,
}


/// One telemetry sample as delivered by the poller. Groups missing from the
/// payload stay `None` and are filled from the configured defaults before
/// the store folds them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub cpu_percent: Option<cpu::CpuTimes>,
    #[serde(default)]
    pub memory: Option<memory::MemoryUsage>,
    #[serde(default)]
    pub disks: Option<Vec<disk::DiskUsage>>,
    #[serde(default)]
    pub load: Option<Vec<load::LoadPoint>>,
}
