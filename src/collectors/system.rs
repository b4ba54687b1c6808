use log::{debug, error};
use std::time::Instant;
use systemstat::{Platform, System};

use crate::models::load::LoadPoint;

pub async fn collect_load(sys: &System) -> Vec<LoadPoint> {
    let start = Instant::now();
    let result = match sys.load_average() {
        Ok(loadavg) => LoadPoint::series(loadavg.one, loadavg.five, loadavg.fifteen),
        Err(x) => {
            error!("Load average: error: {}", x);
            LoadPoint::series(0.0, 0.0, 0.0)
        }
    };
    debug!("collect_load took: {} ms", start.elapsed().as_millis());
    result
}
