use crate::docs;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name, looked up at the project root.
pub const CONFIG_FILE: &str = "toolboard.yaml";

/// Project configuration. Every field has a default so an absent or partial
/// config file is fine; the subsystem never writes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Status report document (table plus detailed sections), relative to root.
    #[serde(default = "default_status_doc")]
    pub status_doc: String,
    /// Progress log document, relative to root.
    #[serde(default = "default_progress_doc")]
    pub progress_doc: String,
    /// How long a parsed snapshot may be served before reparsing.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

fn default_status_doc() -> String {
    docs::STATUS_DOC.to_string()
}

fn default_progress_doc() -> String {
    docs::PROGRESS_DOC.to_string()
}

fn default_cache_ttl_secs() -> u64 {
    120
}

impl Default for Config {
    fn default() -> Self {
        Self {
            status_doc: default_status_doc(),
            progress_doc: default_progress_doc(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

impl Config {
    /// Load `toolboard.yaml` from `root`, falling back to defaults when the
    /// file does not exist.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&data)?;
        Ok(config)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
