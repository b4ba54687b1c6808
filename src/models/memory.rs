use serde::{Deserialize, Serialize};

/// Memory usage in bytes, except `percent` which is 0-100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryUsage {
    #[serde(default)]
    pub used: f64,
    #[serde(default)]
    pub free: f64,
    #[serde(default)]
    pub buffer: f64,
    #[serde(default)]
    pub cache: f64,
    #[serde(default)]
    pub percent: f64,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub available: f64,
}

impl MemoryUsage {
    pub const METRICS: [&'static str; 7] =
        ["used", "free", "buffer", "cache", "percent", "total", "available"];

    pub fn get(&self, metric: &str) -> f64 {
        match metric {
            "used" => self.used,
            "free" => self.free,
            "buffer" => self.buffer,
            "cache" => self.cache,
            "percent" => self.percent,
            "total" => self.total,
            "available" => self.available,
            _ => 0.0,
        }
    }
}
