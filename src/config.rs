use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{self, FitUnitsError};
use crate::logging::LogConfig;
use crate::registry::UnitSystemRegistry;
use crate::units::UnitSystem;

/// Key of the unit system setting
pub const UNIT_SYSTEM_KEY: &str = "unit-system";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application metadata
    pub metadata: ConfigMetadata,

    /// Display preferences
    #[serde(default)]
    pub display: DisplaySettings,

    /// Logging setup
    #[serde(default)]
    pub logging: LogConfig,
}

/// Configuration metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigMetadata {
    /// Configuration format version
    pub version: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

/// Display preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Persisted unit system id, stored as a string setting
    pub unit_system: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let now = Utc::now();

        AppConfig {
            metadata: ConfigMetadata {
                version: "1.0".to_string(),
                created_at: now,
                updated_at: now,
            },
            display: DisplaySettings::default(),
            logging: LogConfig::default(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            unit_system: UnitSystem::Metric.id().to_string(),
        }
    }
}

/// Configuration management implementation
impl AppConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| "Failed to parse TOML configuration")?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.metadata.updated_at = Utc::now();

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let toml_content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration to TOML")?;

        fs::write(&path, toml_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Get default configuration file path
    pub fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fitunits")
            .join("config.toml")
    }

    /// Load configuration with fallback to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::info!(
                    path = %path.as_ref().display(),
                    error = %e,
                    "Config file not loaded, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Registry initialized from the persisted unit system setting
    pub fn unit_registry(&self) -> UnitSystemRegistry {
        UnitSystemRegistry::init_from_setting(Some(self.display.unit_system.as_str()))
    }

    /// Persist a unit system choice
    pub fn set_unit_system(&mut self, id: i32) {
        self.display.unit_system = id.to_string();
        self.metadata.updated_at = Utc::now();
    }

    /// Read a setting by key as `"<stored value> (<resolved name>)"`
    pub fn get_value(&self, key: &str) -> error::Result<String> {
        match key.trim() {
            UNIT_SYSTEM_KEY => Ok(format!(
                "{} ({})",
                self.display.unit_system,
                self.unit_registry().current().name()
            )),
            other => Err(FitUnitsError::Config(format!("Unknown configuration key: {}", other))),
        }
    }

    /// Change a setting by key.
    ///
    /// Unit system ids must be numeric; an unknown id selects Metric, and the
    /// resolved id is what gets stored.
    pub fn set_value(&mut self, key: &str, value: &str) -> error::Result<UnitSystem> {
        match key.trim() {
            UNIT_SYSTEM_KEY => {
                let id: i32 = value.trim().parse().map_err(|_| {
                    FitUnitsError::Validation(format!("Unit system id must be a number: {}", value))
                })?;
                let mut registry = UnitSystemRegistry::new();
                registry.select(id);
                let selected = registry.current();
                self.set_unit_system(selected.id());
                Ok(selected)
            }
            other => Err(FitUnitsError::Config(format!("Unknown configuration key: {}", other))),
        }
    }
}
