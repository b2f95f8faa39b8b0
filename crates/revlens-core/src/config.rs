//! Configuration types and layered loading.
//!
//! Configuration is layered: embedded defaults, then the user config file
//! (`<config dir>/revlens/config.toml`), then the per-project `revlens.toml`.
//! Later layers replace earlier ones; serde field defaults make partial files
//! complete.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// File name of the per-project configuration override.
pub const PROJECT_CONFIG_FILE: &str = "revlens.toml";

const DEFAULT_CONFIG: &str = include_str!("../assets/default.toml");

/// Toolkit configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Package-to-path resolution settings.
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// External client invocation settings.
    #[serde(default)]
    pub client: ClientConfig,
}

/// Settings for mapping package names onto content files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Package mount point that maps onto the content directory.
    #[serde(default = "ResolverConfig::default_mount_point")]
    pub mount_point: String,

    /// Content directory, relative to the project root.
    #[serde(default = "ResolverConfig::default_content_dir")]
    pub content_dir: String,

    /// Extension appended to resolved package files.
    #[serde(default = "ResolverConfig::default_asset_extension")]
    pub asset_extension: String,
}

impl ResolverConfig {
    fn default_mount_point() -> String {
        "/Game/".to_string()
    }

    fn default_content_dir() -> String {
        "Content".to_string()
    }

    fn default_asset_extension() -> String {
        ".uasset".to_string()
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            mount_point: Self::default_mount_point(),
            content_dir: Self::default_content_dir(),
            asset_extension: Self::default_asset_extension(),
        }
    }
}

/// Settings for the external version-control client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Client binary name or alias. Never validated up front; a launch
    /// failure is reported when dispatch actually runs.
    #[serde(default = "ClientConfig::default_binary")]
    pub binary: String,

    /// Verb arguments for "reveal and select in client".
    #[serde(default = "ClientConfig::default_select_args")]
    pub select_args: Vec<String>,

    /// Verb arguments for "open revision history".
    #[serde(default = "ClientConfig::default_history_args")]
    pub history_args: Vec<String>,
}

impl ClientConfig {
    fn default_binary() -> String {
        "p4vc".to_string()
    }

    fn default_select_args() -> Vec<String> {
        vec!["workspacewindow".to_string(), "-s".to_string()]
    }

    fn default_history_args() -> Vec<String> {
        vec!["history".to_string()]
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            binary: Self::default_binary(),
            select_args: Self::default_select_args(),
            history_args: Self::default_history_args(),
        }
    }
}

impl AppConfig {
    /// Load configuration for a project: defaults → user config → project file.
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        Self::load_layered(project_root, user_config_path().as_deref())
    }

    fn load_layered(project_root: &Path, user_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::embedded_defaults();

        if let Some(user_path) = user_path {
            if user_path.exists() {
                config = Self::from_file(user_path)?;
            }
        }

        let project_path = project_root.join(PROJECT_CONFIG_FILE);
        if project_path.exists() {
            config = Self::from_file(&project_path)?;
        }

        Ok(config)
    }

    /// The built-in defaults, with no user or project overrides applied.
    pub fn embedded_defaults() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config is valid")
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Path of the user-level config file, if a config directory exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("revlens").join("config.toml"))
}
