//! CLI configuration, persisted as JSON.

use std::path::{Path, PathBuf};

use hf_catalog::{DEFAULT_API_URL, OutputFormat};
use serde::{Deserialize, Serialize};

/// Keys accepted by `config set`.
pub const CONFIG_KEYS: &[&str] = &["base_url", "token", "default_limit", "output_format"];

/// Global configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Fallback API token when neither `--token` nor `HF_TOKEN` is set.
    #[serde(default)]
    pub token: Option<String>,
    /// Default `--limit` for `list-models`.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.into()
}
fn default_limit() -> u32 {
    20
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            default_limit: default_limit(),
            output_format: OutputFormat::default(),
        }
    }
}

impl AppConfig {
    /// Platform config directory: `~/.config/hf-models/`
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hf-models")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.json")
    }

    /// Load from disk, or return defaults if the file doesn't exist.
    pub fn load_or_default() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let data = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_file())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let data = serde_json::to_string_pretty(self)?;
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Update one key from its string form. An empty token clears it.
    pub fn set(&mut self, key: &str, value: String) -> anyhow::Result<()> {
        match key {
            "base_url" => self.base_url = value,
            "token" => self.token = Some(value).filter(|t| !t.is_empty()),
            "default_limit" => self.default_limit = value.parse()?,
            "output_format" => self.output_format = value.parse()?,
            _ => anyhow::bail!(
                "Unknown config key: {key} (expected one of {})",
                CONFIG_KEYS.join(", ")
            ),
        }
        Ok(())
    }

    /// Copy safe to print: the token is masked.
    pub fn redacted(&self) -> Self {
        Self {
            token: self.token.as_ref().map(|_| "********".into()),
            ..self.clone()
        }
    }
}
