//! Configuration handling for the KSIM CLI
//!
//! Supports loading configuration from ksim.toml files with CLI argument overrides.

use anyhow::{Context, Result};
use ksim_core::ScanStrategy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Matrix management strategy ("reuse", "fresh" or "parallel")
    #[serde(default)]
    pub strategy: ScanStrategy,

    /// Worker threads for the parallel strategy
    #[serde(default = "default_threads")]
    pub threads: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Cross-check every motif with the unbanded edit distance before printing
    #[serde(default)]
    pub verify: bool,
}

fn default_threads() -> usize { num_cpus::get() }

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            strategy: ScanStrategy::default(),
            threads: default_threads(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)?
            }
            None => {
                let default_path = PathBuf::from("ksim.toml");
                if default_path.exists() {
                    log::info!("Loading configuration from: ksim.toml");
                    Self::load_from_file(&default_path)?
                } else {
                    log::debug!("Using default configuration");
                    Self::default()
                }
            }
        };

        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;

        Ok(config)
    }

    /// Generate example configuration file content
    pub fn example_toml() -> Result<String> {
        toml::to_string_pretty(&Self::default())
            .context("Failed to serialize default configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.scan.strategy, ScanStrategy::Reuse);
        assert!(config.scan.threads >= 1);
        assert!(!config.output.verify);
    }

    #[test]
    fn test_config_roundtrip() -> Result<()> {
        let mut config = Config::default();
        config.scan.strategy = ScanStrategy::Parallel;
        config.scan.threads = 3;

        let mut temp_file = NamedTempFile::new()?;
        write!(temp_file, "{}", toml::to_string_pretty(&config)?)?;
        let loaded = Config::load_from_file(temp_file.path())?;

        assert_eq!(loaded.scan.strategy, ScanStrategy::Parallel);
        assert_eq!(loaded.scan.threads, 3);
        assert_eq!(loaded.output.verify, config.output.verify);

        Ok(())
    }

    #[test]
    fn test_partial_config_uses_defaults() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "[scan]\nstrategy = \"fresh\"")?;

        let config = Config::load(Some(file.path()))?;
        assert_eq!(config.scan.strategy, ScanStrategy::Fresh);
        assert_eq!(config.scan.threads, num_cpus::get());
        assert!(!config.output.verify);

        Ok(())
    }

    #[test]
    fn test_invalid_strategy_rejected() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "[scan]\nstrategy = \"quantum\"")?;

        assert!(Config::load_from_file(file.path()).is_err());
        Ok(())
    }

    #[test]
    fn test_example_toml_generation() -> Result<()> {
        let example = Config::example_toml()?;
        assert!(example.contains("[scan]"));
        assert!(example.contains("[output]"));
        assert!(example.contains("strategy = \"reuse\""));
        Ok(())
    }
}
