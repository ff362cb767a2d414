use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE: &str = "vermatch.toml";

/// The vermatch configuration file structure (vermatch.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VermatchConfig {
    /// Output configuration
    pub output: OutputConfig,

    /// Sort command configuration
    pub sort: SortConfig,
}

/// How results are printed
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,

    /// Colorize text output (defaults to terminal detection)
    pub color: Option<bool>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Sort newest first
    pub reverse: bool,
}

impl VermatchConfig {
    /// Load configuration from vermatch.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE);

            if config_path.exists() {
                log::debug!("Loading configuration from {}", config_path.display());
                let content = std::fs::read_to_string(&config_path)
                    .with_context(|| format!("Failed to read {}", config_path.display()))?;
                let config: VermatchConfig = toml::from_str(&content)
                    .with_context(|| format!("Invalid configuration in {}", config_path.display()))?;
                return Ok(Some(config));
            }

            // Move to parent directory
            if !current.pop() {
                // Reached filesystem root, no config found
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }
}
