use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskUsage {
    pub device: String,
    pub mountpoint: String,
    pub used: u64,
    pub total: u64,
    pub percent: f32,
    #[serde(default)]
    pub label: String,
}

impl DiskUsage {
    pub fn new(device: String, mountpoint: String, used: u64, total: u64) -> Self {
        let percent = if total > 0 {
            used as f32 / total as f32 * 100.0
        } else {
            0.0
        };
        let label = format!(
            "{:.1}/{:.1}GB",
            used as f64 / 1_000_000_000.0,
            total as f64 / 1_000_000_000.0
        );
        Self {
            device,
            mountpoint,
            used,
            total,
            percent,
            label,
        }
    }
}

impl Default for DiskUsage {
    fn default() -> Self {
        Self {
            device: String::new(),
            mountpoint: String::new(),
            used: 0,
            total: 0,
            percent: 0.0,
            label: String::from("0.0/0.0GB"),
        }
    }
}
