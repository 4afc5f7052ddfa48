//! Configuration Loader (Figment-based)
//!
//! Loads and merges the service manifest from multiple sources:
//! 1. Built-in defaults (Serialized)
//! 2. Project manifest (servicedoc.toml)
//! 3. Environment variables (SERVICEDOC_* prefix)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::types::Config;
use crate::constants::config::{ENV_PREFIX, MANIFEST_FILE};
use crate::types::{DocError, Result};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load the manifest of the current directory:
    /// defaults → servicedoc.toml → env vars
    pub fn load() -> Result<Config> {
        let root = std::env::current_dir()?;
        Self::load_from_dir(&root)
    }

    /// Same resolution chain as [`load`](Self::load), rooted at `dir`
    pub fn load_from_dir(dir: &Path) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let manifest = Self::manifest_path(dir);
        if manifest.exists() {
            debug!("Loading manifest from: {}", manifest.display());
            figment = figment.merge(Toml::file(&manifest));
        }

        // e.g. SERVICEDOC_PROJECT_NAME -> project.name
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split('_').lowercase(true));

        Self::extract(figment)
    }

    /// Load a manifest from a specific file only
    pub fn load_from_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(DocError::Config(format!(
                "Manifest not found: {}",
                path.display()
            )));
        }
        debug!("Loading manifest from: {}", path.display());

        Self::extract(
            Figment::new()
                .merge(Serialized::defaults(Config::default()))
                .merge(Toml::file(path)),
        )
    }

    /// Load a manifest from TOML text
    pub fn load_from_str(toml: &str) -> Result<Config> {
        Self::extract(
            Figment::new()
                .merge(Serialized::defaults(Config::default()))
                .merge(Toml::string(toml)),
        )
    }

    /// Path of the project manifest under `dir`
    pub fn manifest_path(dir: &Path) -> PathBuf {
        dir.join(MANIFEST_FILE)
    }

    fn extract(figment: Figment) -> Result<Config> {
        let config: Config = figment
            .extract()
            .map_err(|e| DocError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;
        debug!(services = config.services.len(), "manifest loaded");

        Ok(config)
    }
}
