//! Optional TOML settings: built-in defaults + `~/.discreta/config.toml`.
//!
//! ```toml
//! [limits]
//! perfect_live = 20000   # compute perfect numbers up to here, table above
//! triples = 300          # largest N accepted by the triple search
//!
//! [output]
//! color = true
//! json = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::core::perfect::DEFAULT_LIVE_LIMIT;
use crate::core::triples::DEFAULT_MAX_BOUND;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub limits: Limits,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub perfect_live: u64,
    pub triples: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self { perfect_live: DEFAULT_LIVE_LIMIT, triples: DEFAULT_MAX_BOUND }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
    pub json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true, json: false }
    }
}

impl Config {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        Ok(toml::from_str(txt)?)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }

    /// Missing file → defaults. Unreadable or malformed file → warning + defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(p) = path else {
            return Self::default();
        };
        if !p.exists() {
            debug!(path = %p.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::from_toml_file(p) {
            Ok(cfg) => {
                debug!(path = %p.display(), ?cfg, "loaded config");
                cfg
            }
            Err(e) => {
                warn!("{:#}; using built-in defaults", e);
                Self::default()
            }
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~/.discreta/config.toml
    dirs_next::home_dir().map(|h| h.join(".discreta").join("config.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}
