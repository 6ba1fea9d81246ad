//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$GITQ_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitq/config.toml`
//! 3. `~/.gitq/config.toml`
//!
//! # Repo Config
//!
//! Located at `<common_dir>/gitq/config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// quiet = false
/// show_queues = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Suppress status output unless overridden on the command line
    pub quiet: Option<bool>,

    /// Print queue contents after checkout
    pub show_queues: Option<bool>,
}

/// Repository configuration.
///
/// # Example
///
/// ```toml
/// state_dir = ".gitq"
/// show_queues = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RepoConfig {
    /// Directory for queue files and the lock. Relative paths resolve
    /// against the work tree root.
    pub state_dir: Option<PathBuf>,

    /// Print queue contents after checkout (overrides global)
    pub show_queues: Option<bool>,
}

impl RepoConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `state_dir` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(dir) = &self.state_dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "state_dir cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_parses_all_keys() {
        let config: GlobalConfig = toml::from_str("quiet = true\nshow_queues = false").unwrap();
        assert_eq!(config.quiet, Some(true));
        assert_eq!(config.show_queues, Some(false));
    }

    #[test]
    fn repo_parses_state_dir() {
        let config: RepoConfig = toml::from_str("state_dir = \".gitq\"").unwrap();
        assert_eq!(config.state_dir, Some(PathBuf::from(".gitq")));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_state_dir_rejected() {
        let config: RepoConfig = toml::from_str("state_dir = \"\"").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(toml::from_str::<GlobalConfig>("trunk = \"main\"").is_err());
        assert!(toml::from_str::<RepoConfig>("quiet = true").is_err());
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(toml::from_str::<GlobalConfig>("").unwrap(), GlobalConfig::default());
        assert_eq!(toml::from_str::<RepoConfig>("").unwrap(), RepoConfig::default());
    }
}
