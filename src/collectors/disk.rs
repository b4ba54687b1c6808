use log::debug;
use std::time::Instant;

use crate::models::disk::DiskUsage;

pub async fn collect_usage(disks: &sysinfo::Disks, allowed: &Vec<&str>) -> Vec<DiskUsage> {
    let start = Instant::now();
    let mut result = Vec::new();

    for disk in disks {
        if let Some(mount_str) = disk.mount_point().to_str() {
            if !disk.is_removable() && allowed.contains(&mount_str) {
                let total = disk.total_space();
                let used = total - disk.available_space();
                result.push(DiskUsage::new(
                    disk.name().to_string_lossy().into_owned(),
                    mount_str.to_string(),
                    used,
                    total,
                ));
            }
        }
    }

    debug!("collect_usage took: {} ms", start.elapsed().as_millis());
    result
}
