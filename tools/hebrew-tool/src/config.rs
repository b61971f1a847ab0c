use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Cbor,
}

/// Settings read from `hebrew-tool.toml`. Command-line flags win over these.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    pub format: Option<OutputFormat>,
    pub normalize: bool,
}

pub fn default_config_path() -> Option<PathBuf> {
    let mut p = dirs::config_dir()?;
    p.push("hebrew-study");
    p.push("hebrew-tool.toml");
    Some(p)
}

pub fn parse_config(source: &str) -> Result<ToolConfig, Box<dyn Error>> {
    Ok(toml::from_str(source)?)
}

/// Load the explicit config file, or the default one if it exists.
pub fn load_config(explicit: Option<&Path>) -> Result<ToolConfig, Box<dyn Error>> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => {
                tracing::debug!("no config file, using defaults");
                return Ok(ToolConfig::default());
            }
        },
    };
    let source = fs::read_to_string(&path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    tracing::info!("loaded config from {}", path.display());
    parse_config(&source)
}
