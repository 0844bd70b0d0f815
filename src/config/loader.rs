//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::calculation::{builtin_designation_table, lookup_basic_config};
use crate::error::{EngineError, EngineResult};
use crate::models::{HotelDesignation, Zone};

use super::types::{
    DesignationBasicConfig, DesignationTable, DesignationsConfig, EngineConfig, EngineSettings,
};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/tn_hotel/
/// ├── engine.yaml        # Engine settings (DA, gross policy, defaults)
/// └── designations.yaml  # Optional (zone, designation) Basic defaults
/// ```
///
/// When `designations.yaml` is absent the built-in designation table is used.
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
/// use salary_engine::models::{HotelDesignation, Zone};
///
/// let loader = ConfigLoader::load("./config/tn_hotel").unwrap();
/// let config = loader.get_basic_config(Zone::A, HotelDesignation::Waiter);
/// println!("Waiter in Zone A: {:?}", config);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `engine.yaml` is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or unknown designations (`ConfigParseError`)
    /// - Any value is out of range (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<EngineSettings>(&path.join("engine.yaml"))?;
        settings.validate()?;

        let designations_path = path.join("designations.yaml");
        let designations = if designations_path.exists() {
            let file = Self::load_yaml::<DesignationsConfig>(&designations_path)?;
            DesignationTable::from_entries(file.designations)?
        } else {
            debug!(
                path = %designations_path.display(),
                "No designations file, using built-in table"
            );
            builtin_designation_table().clone()
        };

        debug!(
            path = %path.display(),
            designations = designations.len(),
            gross_policy = ?settings.gross_salary_policy,
            "Loaded engine configuration"
        );

        Ok(Self {
            config: EngineConfig::new(settings, designations),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Consumes the loader, returning the engine configuration.
    pub fn into_config(self) -> EngineConfig {
        self.config
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        self.config.settings()
    }

    /// Gets the Basic configuration for a zone and designation.
    pub fn get_basic_config(
        &self,
        zone: Zone,
        designation: HotelDesignation,
    ) -> Option<&DesignationBasicConfig> {
        lookup_basic_config(self.config.designations(), zone, designation)
    }
}
