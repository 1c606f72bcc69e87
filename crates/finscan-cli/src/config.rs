//! Runtime configuration: an optional TOML file layered under `FINSCAN_*`
//! environment variables.

use std::{
  path::{Path, PathBuf},
  time::Duration,
};

use anyhow::{Context, Result};
use finscan_core::Catalog;
use serde::Deserialize;

/// Shape of `finscan.toml`. Every field is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CliConfig {
  /// SQLite file holding history, purchases, the catch log, and the role.
  pub store_path:    PathBuf,
  /// Simulated scan latency.
  pub scan_delay_ms: u64,
  /// JSON catalog to use instead of the built-in table.
  pub catalog_path:  Option<PathBuf>,
}

impl Default for CliConfig {
  fn default() -> Self {
    Self {
      store_path:    PathBuf::from("~/.local/share/finscan/state.db"),
      scan_delay_ms: 2000,
      catalog_path:  None,
    }
  }
}

impl CliConfig {
  /// Read `path` (if it exists) and the environment.
  pub fn load(path: &Path) -> Result<Self> {
    let settings = config::Config::builder()
      .add_source(config::File::from(path.to_path_buf()).required(false))
      .add_source(config::Environment::with_prefix("FINSCAN"))
      .build()
      .context("failed to read config file")?;

    settings
      .try_deserialize()
      .context("failed to deserialise CliConfig")
  }

  pub fn scan_delay(&self) -> Duration { Duration::from_millis(self.scan_delay_ms) }

  /// The configured catalog, or the built-in one. A catalog file that fails
  /// validation aborts startup.
  pub fn catalog(&self) -> Result<Catalog> {
    let Some(path) = &self.catalog_path else {
      return Ok(Catalog::builtin().clone());
    };
    let path = expand_tilde(path);
    let raw = std::fs::read_to_string(&path)
      .with_context(|| format!("reading catalog {}", path.display()))?;
    Catalog::from_json(&raw)
      .with_context(|| format!("loading catalog {}", path.display()))
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
