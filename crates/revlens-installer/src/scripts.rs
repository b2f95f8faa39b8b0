//! Startup script installation.
//!
//! The editor-side integration is two Python scripts executed by the engine's
//! scripting hook: the context-menu module itself, and the startup shim that
//! registers it. Both ship embedded so installation is a plain byte copy.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::InstallError;

pub const MENU_SCRIPT_NAME: &str = "p4_context_menu.py";
pub const INIT_SCRIPT_NAME: &str = "init_unreal.py";

const MENU_SCRIPT: &str = include_str!("../assets/p4_context_menu.py");
const INIT_SCRIPT: &str = include_str!("../assets/init_unreal.py");

/// Write both startup scripts into `<project>/Content/Python/`, creating the
/// directory if needed. Existing copies are overwritten so reinstalling
/// refreshes them. Returns the written paths.
pub fn install_scripts(project_root: &Path) -> Result<Vec<PathBuf>, InstallError> {
    let python_dir = project_root.join("Content").join("Python");
    fs::create_dir_all(&python_dir).map_err(|source| InstallError::Write {
        path: python_dir.clone(),
        source,
    })?;

    let mut written = Vec::with_capacity(2);
    for (name, contents) in [(MENU_SCRIPT_NAME, MENU_SCRIPT), (INIT_SCRIPT_NAME, INIT_SCRIPT)] {
        let path = python_dir.join(name);
        fs::write(&path, contents).map_err(|source| InstallError::Write {
            path: path.clone(),
            source,
        })?;
        tracing::info!("installed {}", path.display());
        written.push(path);
    }

    Ok(written)
}
