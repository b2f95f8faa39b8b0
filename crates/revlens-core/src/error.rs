//! Error types for the revlens toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// Dispatch errors - surfaced to the user as notifications, never dialogs.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The external client binary could not be launched.
    #[error("failed to launch external client: `{command}`: {source}")]
    ToolLaunchFailed {
        /// The full command line that was attempted.
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The host editor's revision history capability is absent or disabled.
    #[error("host revision history capability is unavailable")]
    HostCapabilityUnavailable,
}

/// Per-entry resolution errors.
///
/// These never abort a batch; the resolver logs them at debug level and
/// continues with the remaining entries.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The package is not under the configured mount point (engine or plugin
    /// content, for example) and has no resolvable location in this project.
    #[error("package '{package}' is outside the configured mount point")]
    UnmountedPackage { package: String },

    /// The package name is empty or reduces to nothing after stripping.
    #[error("package name '{package}' is malformed")]
    MalformedPackage { package: String },

    /// Resolution produced a path with no file behind it.
    #[error("no file backs the package: {}", .path.display())]
    MissingFile { path: PathBuf },

    /// A resolved path must be absolute.
    #[error("resolved path is not absolute: {}", .path.display())]
    RelativePath { path: PathBuf },
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error while reading a config file.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parse error.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
