use crate::{drag::RelocationPolicy, error::Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Dashboard settings, read from `config.toml` in the storage directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    pub board_name: String,
    pub relocation: RelocationPolicy,
    pub storage_dir: String,
}

impl HubConfig {
    pub const FILE_NAME: &'static str = "config.toml";
    pub const DEFAULT_STORAGE_DIR: &'static str = ".project-hub";

    /// Parses a TOML document; absent keys take their defaults
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads `config.toml` from `dir`, falling back to defaults when the file
    /// does not exist
    pub async fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(Self::FILE_NAME);

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).await?;
        Self::from_toml(&contents)
    }
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            board_name: "Project Hub".to_string(),
            relocation: RelocationPolicy::default(),
            storage_dir: Self::DEFAULT_STORAGE_DIR.to_string(),
        }
    }
}
