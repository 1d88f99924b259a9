use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use duel_driver::template::{DEFAULT_MAX_CODE_LENGTH, DEFAULT_PLACEHOLDER};
use serde::Deserialize;

pub const CONFIG_FILE: &str = "harness.toml";

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,
    #[serde(default = "default_logs_dir")]
    pub logs_dir: PathBuf,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_max_code_length")]
    pub max_code_length: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            templates_dir: default_templates_dir(),
            logs_dir: default_logs_dir(),
            placeholder: default_placeholder(),
            max_code_length: default_max_code_length(),
        }
    }
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

fn default_logs_dir() -> PathBuf {
    PathBuf::from("logs")
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_max_code_length() -> usize {
    DEFAULT_MAX_CODE_LENGTH
}

impl HarnessConfig {
    pub fn templates_root(&self, workspace: &Path) -> PathBuf {
        workspace.join(&self.templates_dir)
    }

    pub fn logs_root(&self, workspace: &Path) -> PathBuf {
        workspace.join(&self.logs_dir)
    }
}

/// Loads `harness.toml` from the workspace; a missing file means defaults.
pub fn load_config(workspace: &Path) -> Result<HarnessConfig> {
    let path = workspace.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(HarnessConfig::default());
    }
    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_config(&content).with_context(|| format!("failed to parse config {}", path.display()))
}

fn parse_config(content: &str) -> Result<HarnessConfig> {
    let config: HarnessConfig = toml::from_str(content)?;
    if config.placeholder.is_empty() {
        bail!("placeholder must not be empty");
    }
    if config.max_code_length == 0 {
        bail!("max_code_length must be positive");
    }
    Ok(config)
}
