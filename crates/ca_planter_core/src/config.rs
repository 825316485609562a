//! Configuration management for generation runs.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file. Every run parameter is read once at startup.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//! 3. Command-line overrides applied by the binary
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [automaton]
//! width = 400
//! height = 60
//! rule = 30
//! seed = 42
//! initial_condition = "random"
//!
//! [planter]
//! radius = 40.0
//! thickness = 2.0
//!
//! [output]
//! directory = "."
//! scad = true
//! raster = false
//! json = false
//! preview = true
//! ```

use anyhow::Context;
use ca_planter_data::InitialCondition;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Automaton parameters: grid size, rule and seed row.
///
/// `width` is the number of cells around the planter's circumference and
/// `height` the number of time steps stacked along its axis.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AutomatonConfig {
    pub width: usize,
    pub height: usize,
    pub rule: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub initial_condition: InitialCondition,
}

impl Default for AutomatonConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 60,
            rule: 30,
            seed: None,
            initial_condition: InitialCondition::Random,
        }
    }
}

/// Constants interpolated into the planter model.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PlanterConfig {
    pub radius: f64,
    pub thickness: f64,
}

impl Default for PlanterConfig {
    fn default() -> Self {
        Self {
            radius: 40.0,
            thickness: 2.0,
        }
    }
}

/// Which artifacts a run produces and where.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub scad: bool,
    pub raster: bool,
    pub json: bool,
    pub preview: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            scad: true,
            raster: false,
            json: false,
            preview: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub automaton: AutomatonConfig,
    pub planter: PlanterConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    /// Loads the configuration at `path`.
    ///
    /// A missing file yields the defaults and nothing is written to disk.
    /// A file that exists but does not parse is an error.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_run() {
        let config = AppConfig::default();
        assert_eq!(config.automaton.width, 400);
        assert_eq!(config.automaton.height, 60);
        assert_eq!(config.automaton.rule, 30);
        assert_eq!(config.planter.radius, 40.0);
        assert_eq!(config.planter.thickness, 2.0);
        assert!(config.output.scad);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [automaton]
            width = 40
            rule = 110
            initial_condition = "single_center"
            "#,
        )
        .unwrap();
        assert_eq!(config.automaton.width, 40);
        assert_eq!(config.automaton.height, 60);
        assert_eq!(config.automaton.rule, 110);
        assert_eq!(
            config.automaton.initial_condition,
            InitialCondition::SingleCenter
        );
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_negative_width_rejected_by_parser() {
        let parsed = toml::from_str::<AppConfig>("[automaton]\nwidth = -3\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = AppConfig::default();
        config.automaton.seed = Some(99);
        let text = toml::to_string(&config).unwrap();
        let restored: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_load_from_missing_file_writes_nothing() {
        let dir = std::env::temp_dir().join("ca_planter_config_test");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, AppConfig::default());
        assert!(!path.exists(), "loading defaults must not create a config file");
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 0);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_from_existing_file() {
        let dir = std::env::temp_dir().join("ca_planter_config_existing_test");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");

        fs::write(&path, "[automaton]\nrule = 90\n").unwrap();
        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.automaton.rule, 90);

        fs::write(&path, "[automaton\nrule = ").unwrap();
        assert!(AppConfig::load_from(&path).is_err());

        let _ = fs::remove_dir_all(&dir);
    }
}
