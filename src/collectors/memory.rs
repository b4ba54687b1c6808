use log::{debug, error};
use std::fs;
use std::time::Instant;
use systemstat::{Platform, System};

use crate::models::memory::MemoryUsage;

pub async fn collect_usage(sys: &System) -> MemoryUsage {
    let start = Instant::now();
    let result = match sys.memory() {
        Ok(mem) => {
            let total = mem.total.as_u64() as f64;
            let free = mem.free.as_u64() as f64;
            let (buffer, cache, available) = read_meminfo();
            // Buffers and cache show up as their own pie slices, keep them
            // out of "used" so the slices sum to the total.
            let used = (total - free - buffer - cache).max(0.0);
            let percent = if total > 0.0 { used / total * 100.0 } else { 0.0 };

            MemoryUsage {
                used,
                free,
                buffer,
                cache,
                percent,
                total,
                available,
            }
        }
        Err(x) => {
            error!("Memory statistics error getting stats: {}", x);
            MemoryUsage::default()
        }
    };
    debug!("collect_usage took: {} ms", start.elapsed().as_millis());
    result
}

// Buffers, Cached and MemAvailable in bytes, zero when unreadable.
fn read_meminfo() -> (f64, f64, f64) {
    let contents = match fs::read_to_string("/proc/meminfo") {
        Ok(contents) => contents,
        Err(x) => {
            error!("Meminfo: error: {}", x);
            return (0.0, 0.0, 0.0);
        }
    };

    let mut buffer = 0.0;
    let mut cache = 0.0;
    let mut available = 0.0;
    for line in contents.lines() {
        let mut parts = line.split_whitespace();
        let key = parts.next().unwrap_or("");
        let value = parts
            .next()
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(0.0)
            * 1024.0;
        match key {
            "Buffers:" => buffer = value,
            "Cached:" => cache = value,
            "MemAvailable:" => available = value,
            _ => {}
        }
    }
    (buffer, cache, available)
}
