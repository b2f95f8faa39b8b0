//! Package-to-path resolution.
//!
//! Maps logical package names (`/Game/...`) onto absolute content files using
//! the project's content directory and asset extension. Resolution is
//! deterministic: the same package always yields the same path.

use std::path::{Component, Path, PathBuf};

use revlens_core::{PackageName, ResolveError, ResolvedAssetPath, ResolverConfig};

/// Resolves package names against one project's content directory.
#[derive(Debug, Clone)]
pub struct PackageResolver {
    content_dir: PathBuf,
    mount_point: String,
    asset_extension: String,
}

impl PackageResolver {
    /// Build a resolver for the given project root.
    ///
    /// The content directory is absolutized against the current working
    /// directory once, here, so resolved paths never depend on where the
    /// process happens to be running later.
    pub fn new(project_root: &Path, config: &ResolverConfig) -> std::io::Result<Self> {
        let content_dir = project_root.join(&config.content_dir);
        let content_dir = if content_dir.is_absolute() {
            content_dir
        } else {
            std::env::current_dir()?.join(content_dir)
        };

        Ok(Self {
            content_dir: normalize_lexically(&content_dir),
            mount_point: config.mount_point.clone(),
            asset_extension: config.asset_extension.clone(),
        })
    }

    /// The absolute content directory this resolver maps into.
    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    /// Resolve one package to the file that backs it.
    ///
    /// Fails for packages outside the mount point, malformed names, and
    /// packages with no on-disk file (never-saved or virtual-only content).
    pub fn resolve(&self, package: &PackageName) -> Result<ResolvedAssetPath, ResolveError> {
        let name = package.package_root();

        let relative = name.strip_prefix(self.mount_point.as_str()).ok_or_else(|| {
            ResolveError::UnmountedPackage {
                package: name.to_string(),
            }
        })?;

        let mut segments: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
        let malformed = || ResolveError::MalformedPackage {
            package: name.to_string(),
        };

        // A package segment is a plain name; dot segments would let a
        // package escape the content directory.
        if segments.iter().any(|s| *s == "." || *s == "..") {
            return Err(malformed());
        }

        let last = segments.pop().ok_or_else(malformed)?;

        let mut path = self.content_dir.clone();
        for segment in segments {
            path.push(segment);
        }
        path.push(format!("{last}{}", self.asset_extension));

        if !path.is_file() {
            return Err(ResolveError::MissingFile { path });
        }

        ResolvedAssetPath::new(path)
    }

    /// Resolve a batch, keeping source order.
    ///
    /// Per-entry failures are logged at debug level and skipped; they never
    /// abort resolution of the remaining entries. Distinct packages are not
    /// deduplicated even if they land on the same file.
    pub fn resolve_batch(&self, packages: &[PackageName]) -> Vec<ResolvedAssetPath> {
        packages
            .iter()
            .filter_map(|package| match self.resolve(package) {
                Ok(path) => {
                    tracing::debug!("resolved '{package}' to {path}");
                    Some(path)
                }
                Err(err) => {
                    tracing::debug!("skipping '{package}': {err}");
                    None
                }
            })
            .collect()
    }
}

/// Collapse `.` and `..` components without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component.as_os_str());
                }
            }
            _ => normalized.push(component.as_os_str()),
        }
    }
    normalized
}
