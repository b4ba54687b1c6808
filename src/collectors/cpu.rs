use log::{debug, error};
use std::time::Instant;
use systemstat::{Platform, System};

use crate::models::cpu::CpuTimes;

pub async fn collect_times(sys: &System) -> CpuTimes {
    let start = Instant::now();
    let result = match sys.cpu_load_aggregate() {
        Ok(measurement) => {
            tokio::time::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL).await;
            match measurement.done() {
                Ok(cpu) => CpuTimes {
                    user: (cpu.user + cpu.nice) as f64 * 100.0,
                    system: cpu.system as f64 * 100.0,
                    interrupt: cpu.interrupt as f64 * 100.0,
                    idle: cpu.idle as f64 * 100.0,
                    // No portable iowait/steal buckets; they stay zero so the
                    // pie label order is stable everywhere.
                    io: 0.0,
                    steal: 0.0,
                },
                Err(x) => {
                    error!("CPU load measurement error: {}", x);
                    CpuTimes::default()
                }
            }
        }
        Err(x) => {
            error!("CPU load: error: {}", x);
            CpuTimes::default()
        }
    };
    debug!("collect_times took: {} ms", start.elapsed().as_millis());
    result
}
