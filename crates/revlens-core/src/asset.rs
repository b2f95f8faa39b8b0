//! Package and resolved-path types.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ResolveError;

/// A logical, engine-internal package path such as `/Game/Characters/BP_Player`.
///
/// This is the virtual identifier the asset browser reports for a selected
/// asset. It is not a filesystem path; the resolver turns it into one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageName(pub String);

impl PackageName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The package portion of the identifier, with any sub-object reference
    /// (`/Game/Asset.Asset:SubObject`) stripped.
    pub fn package_root(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for PackageName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PackageName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for PackageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An absolute, normalized on-disk path produced by successful resolution.
///
/// A `ResolvedAssetPath` exists only when resolution succeeded; unresolved
/// entries are dropped, never carried as an empty or relative path. The
/// constructor enforces the absolute-path half of that invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAssetPath(PathBuf);

impl ResolvedAssetPath {
    /// Wrap an absolute path. Relative paths are rejected so the external
    /// tool never sees a path that depends on the process working directory.
    pub fn new(path: PathBuf) -> Result<Self, ResolveError> {
        if path.is_absolute() {
            Ok(Self(path))
        } else {
            Err(ResolveError::RelativePath { path })
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for ResolvedAssetPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl std::fmt::Display for ResolvedAssetPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
