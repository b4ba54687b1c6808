use serde::{Deserialize, Serialize};

/// CPU time shares in percent (0-100), one bucket per scheduling class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CpuTimes {
    #[serde(default)]
    pub idle: f64,
    #[serde(default)]
    pub interrupt: f64,
    #[serde(default)]
    pub io: f64,
    #[serde(default)]
    pub steal: f64,
    #[serde(default)]
    pub system: f64,
    #[serde(default)]
    pub user: f64,
}

impl CpuTimes {
    /// Metric names in the order the dashboard keeps their history windows.
    pub const METRICS: [&'static str; 6] = ["idle", "interrupt", "io", "steal", "system", "user"];

    pub fn get(&self, metric: &str) -> f64 {
        match metric {
            "idle" => self.idle,
            "interrupt" => self.interrupt,
            "io" => self.io,
            "steal" => self.steal,
            "system" => self.system,
            "user" => self.user,
            _ => 0.0,
        }
    }
}
