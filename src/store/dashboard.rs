use indexmap::IndexMap;
use serde::Serialize;
use std::collections::VecDeque;

use crate::models::cpu::CpuTimes;
use crate::models::disk::DiskUsage;
use crate::models::load::LoadPoint;
use crate::models::memory::MemoryUsage;
use crate::models::{Snapshot, SnapshotDefaults};
use crate::store::Action;

/// Samples kept per metric; matches the width of the line charts.
pub const HISTORY_WINDOW: usize = 20;
/// The poll counter wraps after this many snapshots.
pub const TIMER_MODULUS: i32 = 10;

const CPU_PIE_LABELS: [&str; 6] = ["User", "System", "Interrupt", "Steal", "IO", "Idle"];
const MEMORY_PIE_LABELS: [&str; 4] = ["Used", "Buffer", "Cache", "Free"];

/// Labels paired positionally with the latest absolute values, ready for a
/// pie chart. Rebuilt from scratch on every snapshot, never from history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSummary {
    pub labels: Vec<&'static str>,
    pub values: Vec<f64>,
}

impl Default for PieSummary {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            values: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    pub cpu_percent: IndexMap<&'static str, VecDeque<f64>>,
    pub memory: IndexMap<&'static str, VecDeque<f64>>,
    pub cpu_pie: PieSummary,
    pub memory_pie: PieSummary,
    pub disks: Vec<DiskUsage>,
    pub load: Vec<LoadPoint>,
}

impl Default for DashboardData {
    fn default() -> Self {
        Self {
            cpu_percent: empty_windows(&CpuTimes::METRICS),
            memory: empty_windows(&MemoryUsage::METRICS),
            cpu_pie: PieSummary::default(),
            memory_pie: PieSummary::default(),
            disks: Vec::new(),
            load: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardState {
    pub loading: bool,
    pub error: Option<String>,
    pub timer: i32,
    pub dashboard: DashboardData,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            loading: false,
            error: None,
            timer: -1,
            dashboard: DashboardData::default(),
        }
    }
}

fn empty_windows(metrics: &[&'static str]) -> IndexMap<&'static str, VecDeque<f64>> {
    metrics.iter().map(|m| (*m, VecDeque::new())).collect()
}

fn push_sample(window: &mut VecDeque<f64>, value: f64) {
    window.push_back(value);
    if window.len() > HISTORY_WINDOW {
        window.pop_front();
    }
}

fn cpu_pie(cpu: &CpuTimes) -> PieSummary {
    PieSummary {
        labels: CPU_PIE_LABELS.to_vec(),
        values: vec![cpu.user, cpu.system, cpu.interrupt, cpu.steal, cpu.io, cpu.idle],
    }
}

fn memory_pie(memory: &MemoryUsage) -> PieSummary {
    PieSummary {
        labels: MEMORY_PIE_LABELS.to_vec(),
        values: vec![memory.used, memory.buffer, memory.cache, memory.free],
    }
}

/// Fold one snapshot into the rolling history. Appends every metric to its
/// window, evicting the oldest sample past [`HISTORY_WINDOW`], rebuilds both
/// pies from the raw values, replaces disks and load wholesale and advances
/// the poll counter. Total over any input; the previous state is untouched.
fn apply_snapshot(
    state: &DashboardState,
    snapshot: &Snapshot,
    defaults: &SnapshotDefaults,
) -> DashboardState {
    let cpu = snapshot.cpu_percent.as_ref().unwrap_or(&defaults.cpu_percent);
    let memory = snapshot.memory.as_ref().unwrap_or(&defaults.memory);

    let mut next = state.clone();
    next.loading = false;
    next.error = None;

    for (metric, window) in next.dashboard.cpu_percent.iter_mut() {
        push_sample(window, cpu.get(metric));
    }
    for (metric, window) in next.dashboard.memory.iter_mut() {
        push_sample(window, memory.get(metric));
    }

    next.dashboard.cpu_pie = cpu_pie(cpu);
    next.dashboard.memory_pie = memory_pie(memory);
    next.dashboard.disks = snapshot.disks.clone().unwrap_or_default();
    next.dashboard.load = snapshot.load.clone().unwrap_or_default();
    next.timer = (state.timer + 1) % TIMER_MODULUS;

    next
}

pub fn reduce(state: &DashboardState, action: &Action, defaults: &SnapshotDefaults) -> DashboardState {
    match action {
        Action::DashboardDataFetch => {
            let mut next = state.clone();
            next.loading = true;
            next
        }

        Action::DashboardDataReceived(snapshot) => apply_snapshot(state, snapshot, defaults),

        Action::DashboardDataError(error) => {
            let mut next = state.clone();
            next.loading = false;
            next.error = Some(error.clone());
            next
        }

        Action::AuthAuthenticated { authenticated, .. } => {
            if *authenticated {
                state.clone()
            } else {
                DashboardState::default()
            }
        }

        _ => state.clone(),
    }
}
