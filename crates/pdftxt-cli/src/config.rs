//! Configuration file lookup.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use pdftxt_core::PdftxtConfig;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pdftxt")
        .join("config.json")
}

/// Load the configuration.
///
/// An explicit path must load. Without one, the default location is used
/// when it exists, and the built-in defaults otherwise.
pub fn load(path: Option<&Path>) -> anyhow::Result<PdftxtConfig> {
    if let Some(path) = path {
        return PdftxtConfig::from_file(path)
            .with_context(|| format!("failed to load config file {}", path.display()));
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using config file {}", default_path.display());
        PdftxtConfig::from_file(&default_path)
            .with_context(|| format!("failed to load config file {}", default_path.display()))
    } else {
        Ok(PdftxtConfig::default())
    }
}
