//! Configuration loading and management for the Salary Engine.
//!
//! This module provides functionality to load engine settings and the
//! (zone, designation) Basic table from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use salary_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/tn_hotel").unwrap();
//! println!("Fixed DA: {}", loader.settings().fixed_da);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DesignationBasicConfig, DesignationBasicEntry, DesignationTable, DesignationsConfig,
    EngineConfig, EngineSettings, GrossSalaryPolicy,
};
