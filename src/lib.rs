pub mod config;

use crate::config::AppConfig;
use crate::models::AllowedResources;
use crate::store::{Action, Store};
use anyhow::Context;
use log::{debug, error, info};
use std::time::Duration;

mod collectors;
mod export;
pub mod models;
pub mod store;

pub async fn run() -> anyhow::Result<()> {
    info!("Starting application");

    tokio::select! {
        result = main_loop() => {
            match result {
                Ok(_) => info!("Application completed successfully"),
                Err(e) => {
                    error!("Application error: {e:#}");
                    // Print chain of error causes
                    let mut source = e.source();
                    while let Some(e) = source {
                        error!("Caused by: {e}");
                        source = e.source();
                    }
                    return Err(e).context("Application failed to run");
                }
            }
        }
    }

    Ok(())
}

async fn main_loop() -> anyhow::Result<()> {
    debug!("Loading configuration");
    let config = AppConfig::new().context("Failed to load configuration")?;

    let mut interval = tokio::time::interval(Duration::from_secs(config.poller.interval));
    let mut store = Store::new(config.defaults.clone());

    loop {
        interval.tick().await; // Wait for the next tick

        let allowed_resources = AllowedResources {
            mount_points: config.resources.mount_points.clone(),
        };

        debug!("Collecting telemetry snapshot");
        store.dispatch(Action::DashboardDataFetch);
        let snapshot = collectors::collect_snapshot(&allowed_resources).await;
        store.dispatch(Action::DashboardDataReceived(snapshot));

        // Project the dashboard slice for the charts
        if config.export.enabled {
            if let Err(e) = export::write_state(&config.export, store.dashboard()) {
                error!("Failed to export dashboard state: {}", e);
            }
        }
    }
}
