//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! gitq has two configuration scopes:
//! - **Global**: User-level settings
//! - **Repo**: Repository-level overrides
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Repo config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$GITQ_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitq/config.toml`
//! 3. `~/.gitq/config.toml`
//!
//! # Repo Config Location
//!
//! `<common_dir>/gitq/config.toml`, see
//! [`GitqPaths::repo_config_path`](crate::core::paths::GitqPaths::repo_config_path).

pub mod schema;

pub use schema::{GlobalConfig, RepoConfig};

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::core::paths::GitqPaths;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Merged configuration from all sources.
///
/// Accessor methods apply precedence rules; repo config overrides global
/// config.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Repository configuration (if one was found)
    pub repo: Option<RepoConfig>,
    global_path: Option<PathBuf>,
    repo_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `paths` is provided, also loads the repo config.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed
    /// or validated. Missing files are not an error.
    pub fn load(paths: Option<&GitqPaths>) -> Result<Config, ConfigError> {
        let global_path = Self::find_global_path();
        let repo_path = paths.map(GitqPaths::repo_config_path);
        Self::load_from(global_path.as_deref(), repo_path.as_deref())
    }

    /// Load configuration from explicit file locations.
    ///
    /// Either location may be absent or point at a file that does not
    /// exist.
    pub fn load_from(
        global_path: Option<&Path>,
        repo_path: Option<&Path>,
    ) -> Result<Config, ConfigError> {
        let global_path = global_path.filter(|p| p.exists());
        let repo_path = repo_path.filter(|p| p.exists());

        let global: GlobalConfig = match global_path {
            Some(path) => read_toml(path)?,
            None => GlobalConfig::default(),
        };
        let repo = repo_path.map(read_toml::<RepoConfig>).transpose()?;

        if let Some(r) = &repo {
            r.validate()?;
        }

        tracing::debug!(
            global = ?global_path,
            repo = ?repo_path,
            "loaded configuration"
        );

        Ok(Config {
            global,
            repo,
            global_path: global_path.map(Path::to_path_buf),
            repo_path: repo_path.map(Path::to_path_buf),
        })
    }

    /// Locate the global config file, if any exists.
    fn find_global_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var("GITQ_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("gitq/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        dirs::home_dir()
            .map(|home| home.join(".gitq/config.toml"))
            .filter(|path| path.exists())
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Check if quiet output is the default.
    ///
    /// Defaults to `false` if not configured.
    pub fn quiet(&self) -> bool {
        self.global.quiet.unwrap_or(false)
    }

    /// Check if queue contents are printed after checkout.
    ///
    /// Defaults to `true` if not configured.
    pub fn show_queues(&self) -> bool {
        self.repo
            .as_ref()
            .and_then(|r| r.show_queues)
            .or(self.global.show_queues)
            .unwrap_or(true)
    }

    /// Get the configured state directory, resolved against `work_dir`.
    ///
    /// Returns `None` if the default location should be used.
    pub fn state_dir(&self, work_dir: &Path) -> Option<PathBuf> {
        let dir = self.repo.as_ref()?.state_dir.as_ref()?;
        if dir.is_absolute() {
            Some(dir.clone())
        } else {
            Some(work_dir.join(dir))
        }
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded repo config file.
    pub fn repo_config_loaded_from(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }
}

/// Read and parse a TOML config file.
fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
