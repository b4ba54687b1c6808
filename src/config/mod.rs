use anyhow::{Context, Result};
use config::{Config, File};
use log::{debug, info, LevelFilter};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::models::SnapshotDefaults;

#[derive(Debug, Deserialize, Clone)]
pub struct PollerConfig {
    pub interval: u64,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self { interval: 5 }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    pub file: String,
    pub enabled: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file: "dashboard.json".to_string(),
            enabled: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResourcesConfig {
    #[serde(default)]
    pub mount_points: Vec<String>,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            mount_points: vec!["/".to_string()],
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub poller: PollerConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub resources: ResourcesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub defaults: SnapshotDefaults,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            poller: PollerConfig::default(),
            export: ExportConfig::default(),
            resources: ResourcesConfig::default(),
            logging: LoggingConfig::default(),
            defaults: SnapshotDefaults::default(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        Self::from_file("config.ini")
    }

    pub fn get_log_level(&self) -> LevelFilter {
        match self.logging.level.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            "off" => LevelFilter::Off,
            _ => LevelFilter::Info, // Default to Info if invalid
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_path = path.as_ref();
        debug!("Loading configuration from {}", config_path.display());

        let config = Config::builder()
            .add_source(
                File::with_name(config_path.to_str().unwrap_or(""))
                    .format(config::FileFormat::Ini),
            )
            .build()
            .context(format!(
                "Failed to load config from {}",
                config_path.display()
            ))?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize config")?;

        Ok(app_config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let config_path = path.as_ref();

        // Build the config string
        let mut config_str = String::new();

        // poller section
        config_str.push_str(&format!("[poller]\ninterval = {}\n\n", self.poller.interval));

        // export section
        config_str.push_str(&format!(
            "[export]\nfile = {}\nenabled = {}\n\n",
            self.export.file, self.export.enabled
        ));

        // logging section
        config_str.push_str(&format!("[logging]\nlevel = {}\n\n", self.logging.level));

        // resources section
        config_str.push_str("[resources]\n");
        if !self.resources.mount_points.is_empty() {
            for mount_point in &self.resources.mount_points {
                config_str.push_str(&format!("mount_points = \"{}\"\n", mount_point));
            }
        }

        fs::write(config_path, config_str).context(format!(
            "Failed to save config to {}",
            config_path.display()
        ))?;

        info!("Configuration saved to {}", config_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.poller.interval, 5);
        assert_eq!(config.export.file, "dashboard.json");
        assert_eq!(config.export.enabled, true);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.resources.mount_points, vec!["/".to_string()]);
        assert_eq!(config.defaults.cpu_percent.user, 0.0);
    }

    #[test]
    fn test_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let config_content = "[poller]\ninterval = 10\n\n[export]\nfile = \"state.json\"\nenabled = false\n\n[logging]\nlevel = \"debug\"\n";

        temp_file.write_all(config_content.as_bytes()).unwrap();
        let config_path = temp_file.path();

        let config = AppConfig::from_file(config_path).unwrap();

        assert_eq!(config.poller.interval, 10);
        assert_eq!(config.export.file, "state.json");
        assert_eq!(config.export.enabled, false);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_save_config() {
        let mut config = AppConfig::default();
        // Clear arrays to avoid serialization issues in tests
        config.resources.mount_points.clear();

        config.poller.interval = 30;
        config.export.file = "saved.json".to_string();
        config.export.enabled = false;
        config.logging.level = "warn".to_string();

        let temp_file = NamedTempFile::new().unwrap();
        let config_path = temp_file.path();

        config.save(config_path).unwrap();

        let loaded_config = AppConfig::from_file(config_path).unwrap();

        assert_eq!(loaded_config.poller.interval, 30);
        assert_eq!(loaded_config.export.file, "saved.json");
        assert_eq!(loaded_config.export.enabled, false);
        assert_eq!(loaded_config.logging.level, "warn");
        assert!(loaded_config.resources.mount_points.is_empty());
    }

    #[test]
    fn test_log_level_parsing() {
        let mut config = AppConfig::default();
        config.logging.level = "DEBUG".to_string();
        assert_eq!(config.get_log_level(), LevelFilter::Debug);

        config.logging.level = "nonsense".to_string();
        assert_eq!(config.get_log_level(), LevelFilter::Info);
    }
}
