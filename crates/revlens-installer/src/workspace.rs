//! Perforce workspace detection.
//!
//! Mirrors what a developer would do by hand, in order:
//! 1. `p4 info`, reading the `Client root:` line
//! 2. upward search for a `P4CONFIG` file (name from `$P4CONFIG`,
//!    default `.p4config`)
//! 3. fall back to the project root itself

use std::path::{Path, PathBuf};
use std::process::Command;

/// How the workspace root was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceSource {
    P4Info,
    P4Config,
    ProjectRoot,
}

/// A detected workspace root and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub root: PathBuf,
    pub source: WorkspaceSource,
}

/// Detect the workspace root for a project. Always succeeds; the project
/// root is the fallback of last resort.
pub fn detect_workspace(project_root: &Path) -> Workspace {
    if let Some(root) = client_root_from_p4_info(project_root) {
        tracing::info!("workspace root from p4 info: {}", root.display());
        return Workspace {
            root,
            source: WorkspaceSource::P4Info,
        };
    }

    if let Some(root) = find_p4config_dir(project_root) {
        tracing::info!("workspace root from P4CONFIG: {}", root.display());
        return Workspace {
            root,
            source: WorkspaceSource::P4Config,
        };
    }

    tracing::warn!(
        "could not detect a Perforce workspace, falling back to project root {}",
        project_root.display()
    );
    Workspace {
        root: project_root.to_path_buf(),
        source: WorkspaceSource::ProjectRoot,
    }
}

/// Run `p4 info` from the project directory and extract the client root.
///
/// A missing `p4` binary or a failing command is not an error here, just a
/// reason to try the next detection method.
fn client_root_from_p4_info(project_root: &Path) -> Option<PathBuf> {
    let output = Command::new("p4")
        .arg("info")
        .current_dir(project_root)
        .output();

    let output = match output {
        Ok(output) if output.status.success() => output,
        Ok(output) => {
            tracing::debug!("p4 info exited with {}", output.status);
            return None;
        }
        Err(err) => {
            tracing::debug!("p4 not runnable: {err}");
            return None;
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_client_root(&stdout)
}

/// Extract the `Client root:` value from `p4 info` output.
///
/// Field-name casing varies between server versions, so matching is
/// case-insensitive.
fn parse_client_root(p4_info: &str) -> Option<PathBuf> {
    p4_info.lines().find_map(|line| {
        let (field, value) = line.split_once(':')?;
        if !field.trim().eq_ignore_ascii_case("client root") {
            return None;
        }

        let value = value.trim();
        if value.is_empty() || value == "." {
            None
        } else {
            Some(PathBuf::from(value))
        }
    })
}

/// Search upward from the project root for a P4CONFIG file.
fn find_p4config_dir(project_root: &Path) -> Option<PathBuf> {
    let config_name = std::env::var("P4CONFIG").unwrap_or_else(|_| ".p4config".to_string());

    project_root
        .ancestors()
        .find(|dir| dir.join(&config_name).is_file())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_client_root() {
        let output = "\
User name: alice
Client name: alice_ws
Client root: /home/alice/perforce
Server address: perforce:1666
";
        assert_eq!(
            parse_client_root(output),
            Some(PathBuf::from("/home/alice/perforce"))
        );
    }

    #[test]
    fn test_parse_client_root_is_case_insensitive() {
        assert_eq!(
            parse_client_root("client ROOT: C:\\ws"),
            Some(PathBuf::from("C:\\ws"))
        );
    }

    #[test]
    fn test_parse_client_root_ignores_other_fields_and_blanks() {
        assert_eq!(parse_client_root("Client name: ws\nClient root: \n"), None);
        assert_eq!(parse_client_root("Server root: /srv/p4\n"), None);
        assert_eq!(parse_client_root(""), None);
    }

    #[test]
    fn test_p4config_search_walks_ancestors() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".p4config"), "P4CLIENT=ws\n").unwrap();
        let project = dir.path().join("depot").join("MyGame");
        fs::create_dir_all(&project).unwrap();

        assert_eq!(
            find_p4config_dir(&project),
            Some(dir.path().to_path_buf())
        );
    }

    #[test]
    fn test_fallback_is_project_root() {
        let dir = tempfile::tempdir().unwrap();
        // No p4 connection and no P4CONFIG anywhere under the temp root.
        let workspace = detect_workspace(dir.path());
        if workspace.source == WorkspaceSource::ProjectRoot {
            assert_eq!(workspace.root, dir.path());
        }
    }
}
