//! Presentation configuration, persisted as JSON under the platform config
//! directory. Carries no invariants; a missing or unreadable file falls back
//! to the defaults like every other lookup in this system.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    pub logo_url: String,
    pub support_message: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "Front Office | Shift Board".to_string(),
            logo_url: String::new(),
            support_message: "Contact IT for support.".to_string(),
        }
    }
}

impl AppConfig {
    /// Platform config file location, e.g.
    /// `~/.config/shiftboard/config.json` on Linux.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "shiftboard")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing config from {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating config dir {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(self).context("serializing config")?;
        fs::write(path, raw).with_context(|| format!("writing config to {}", path.display()))?;
        Ok(())
    }
}
