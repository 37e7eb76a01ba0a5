//! CLI configuration.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Top-level gradebook configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradebookConfig {
    /// Decimal places used when printing averages.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
    /// Output format used by `report` when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,
    /// Fixed threshold for the better-or-equal list instead of the average.
    #[serde(default)]
    pub threshold: Option<Decimal>,
}

fn default_decimal_places() -> u32 {
    1
}
fn default_format() -> String {
    "text".to_string()
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            decimal_places: default_decimal_places(),
            default_format: default_format(),
            threshold: None,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `gradebook.toml` in the current directory
/// 2. `~/.config/gradebook/config.toml`
///
/// `GRADEBOOK_THRESHOLD` overrides the threshold from any file.
pub fn load_config_from(path: Option<&Path>) -> Result<GradebookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("gradebook.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => GradebookConfig::default(),
    };

    if let Ok(raw) = std::env::var("GRADEBOOK_THRESHOLD") {
        let threshold = Decimal::from_str(raw.trim())
            .with_context(|| format!("invalid GRADEBOOK_THRESHOLD: '{raw}'"))?;
        config.threshold = Some(threshold);
    }

    Ok(config)
}

fn parse_config(content: &str) -> Result<GradebookConfig> {
    let config: GradebookConfig = toml::from_str(content)?;
    anyhow::ensure!(
        config.decimal_places <= 10,
        "decimal_places must be at most 10"
    );
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("gradebook"))
}
