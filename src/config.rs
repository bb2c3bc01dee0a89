use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::invite::Origin;

/// Seat viewer configuration persisted as TOML.
///
/// Fields:
/// - table_name: table shown when no snapshot names one
/// - protocol, host: origin used for join links (`protocol` keeps its colon)
/// - seats_file: optional JSON file holding a `TableMsg` to load at start
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ViewerConfig {
    pub table_name: String,
    pub protocol: String,
    pub host: String,
    #[serde(default)]
    pub seats_file: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        let origin = Origin::default();
        ViewerConfig {
            table_name: "table-1".to_string(),
            protocol: origin.protocol,
            host: origin.host,
            seats_file: None,
        }
    }
}

impl ViewerConfig {
    /// Load configuration from `path`. If the file does not exist, create it
    /// with defaults and return those.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let s = fs::read_to_string(path)
                .with_context(|| format!("reading config file '{}'", path.display()))?;
            let cfg: ViewerConfig = toml::from_str(&s)
                .with_context(|| format!("parsing TOML config '{}'", path.display()))?;
            Ok(cfg)
        } else {
            let cfg = ViewerConfig::default();
            cfg.save(path)?;
            Ok(cfg)
        }
    }

    /// Write the config to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating config directory '{}'", parent.display()))?;
            }
        }
        let toml_text =
            toml::to_string_pretty(&self).with_context(|| "serializing config to TOML")?;
        fs::write(path, toml_text)
            .with_context(|| format!("writing config to '{}'", path.display()))?;
        Ok(())
    }

    pub fn origin(&self) -> Origin {
        Origin::new(self.protocol.clone(), self.host.clone())
    }
}
