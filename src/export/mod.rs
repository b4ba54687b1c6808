use chrono::Local;
use log::debug;
use serde::Serialize;
use std::fs;
use thiserror::Error;

use crate::config::ExportConfig;
use crate::store::DashboardState;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to serialize dashboard state: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    generated: String,
    dashboard: &'a DashboardState,
}

/// Write the dashboard slice as a JSON document for the chart frontend to
/// pick up.
pub fn write_state(config: &ExportConfig, state: &DashboardState) -> Result<(), ExportError> {
    let document = ExportDocument {
        generated: Local::now().to_rfc3339(),
        dashboard: state,
    };

    let json = serde_json::to_string_pretty(&document)?;
    fs::write(&config.file, json).map_err(|source| ExportError::Io {
        path: config.file.clone(),
        source,
    })?;

    debug!("Exported dashboard state to {}", config.file);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cpu::CpuTimes;
    use crate::models::{Snapshot, SnapshotDefaults};
    use crate::store::{dashboard, Action};
    use tempfile::tempdir;

    #[test]
    fn test_written_document_is_readable_json() {
        let state = dashboard::reduce(
            &DashboardState::default(),
            &Action::DashboardDataReceived(Snapshot {
                cpu_percent: Some(CpuTimes {
                    user: 12.5,
                    idle: 87.5,
                    ..CpuTimes::default()
                }),
                ..Snapshot::default()
            }),
            &SnapshotDefaults::default(),
        );

        let dir = tempdir().unwrap();
        let config = ExportConfig {
            file: dir
                .path()
                .join("dashboard.json")
                .to_string_lossy()
                .into_owned(),
            enabled: true,
        };

        write_state(&config, &state).unwrap();

        let contents = fs::read_to_string(&config.file).unwrap();
        let document: serde_json::Value = serde_json::from_str(&contents).unwrap();

        assert!(document["generated"].is_string());
        assert_eq!(document["dashboard"]["timer"], 0);
        assert_eq!(
            document["dashboard"]["dashboard"]["cpu_percent"]["user"][0],
            12.5
        );
        assert_eq!(
            document["dashboard"]["dashboard"]["cpu_pie"]["labels"][0],
            "User"
        );
    }

    #[test]
    fn test_unwritable_path_reports_io_error() {
        let config = ExportConfig {
            file: "/nonexistent-dir/dashboard.json".to_string(),
            enabled: true,
        };

        let err = write_state(&config, &DashboardState::default()).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
