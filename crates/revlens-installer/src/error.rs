//! Installer errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstallError {
    /// No `*.uproject` file was found at or above the start directory.
    #[error("no .uproject file found at or above {}", .start.display())]
    ProjectNotFound { start: PathBuf },

    /// IO failure while writing scripts or config.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO failure while reading an existing config file.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
