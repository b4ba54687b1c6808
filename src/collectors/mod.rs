use log::debug;
use std::sync::Arc;
use sysinfo::Disks as SysInfoDisks;
use systemstat::System as SystemStat;

use crate::models::{AllowedResources, Snapshot};

pub(crate) mod cpu;
pub(crate) mod disk;
pub(crate) mod memory;
pub(crate) mod system;

/// Collect one full telemetry snapshot from the host. Sub-collectors run
/// concurrently and degrade to zero values on error, so a snapshot is always
/// produced.
pub(crate) async fn collect_snapshot(allowed_resources: &AllowedResources) -> Snapshot {
    let allowed_mount_points: Vec<&str> = allowed_resources
        .mount_points
        .iter()
        .map(|s| s.as_str())
        .collect();

    let sys_stat = Arc::new(SystemStat::new());
    let sys_info_disks = Arc::new(SysInfoDisks::new_with_refreshed_list());

    let (cpu_percent, memory, disks, load) = tokio::join!(
        cpu::collect_times(&sys_stat),
        memory::collect_usage(&sys_stat),
        disk::collect_usage(&sys_info_disks, &allowed_mount_points),
        system::collect_load(&sys_stat),
    );

    let snapshot = Snapshot {
        cpu_percent: Some(cpu_percent),
        memory: Some(memory),
        disks: Some(disks),
        load: Some(load),
    };

    debug!("{:?}", snapshot);

    snapshot
}
