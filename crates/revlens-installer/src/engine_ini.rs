//! `DefaultEngine.ini` patching.
//!
//! Enables the startup script by adding `+StartupScripts=init_unreal.py` to
//! the `[Python]` section. The patch is idempotent and the existing file is
//! backed up before it is rewritten.

use std::fs;
use std::path::Path;

use crate::error::InstallError;
use crate::scripts::INIT_SCRIPT_NAME;

const PYTHON_SECTION: &str = "[Python]";

/// What `enable_startup_script` did to the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IniUpdate {
    /// The file did not exist and was created.
    Created,
    /// The startup script line was added; the original was backed up.
    Patched,
    /// The startup script was already configured; nothing written.
    AlreadyConfigured,
}

/// Ensure `DefaultEngine.ini` loads the startup script on editor start.
pub fn enable_startup_script(config_path: &Path) -> Result<IniUpdate, InstallError> {
    let startup_line = format!("+StartupScripts={INIT_SCRIPT_NAME}");

    if !config_path.exists() {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| InstallError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let contents = format!("{PYTHON_SECTION}\n{startup_line}\n");
        write_config(config_path, &contents)?;
        tracing::info!("created {}", config_path.display());
        return Ok(IniUpdate::Created);
    }

    let existing = fs::read_to_string(config_path).map_err(|source| InstallError::Read {
        path: config_path.to_path_buf(),
        source,
    })?;

    let Some(patched) = patch_config(&existing, &startup_line) else {
        tracing::info!("{} already configured", config_path.display());
        return Ok(IniUpdate::AlreadyConfigured);
    };

    // Keep a copy of what was there before we touch it.
    let backup_path = config_path.with_extension("ini.backup");
    fs::copy(config_path, &backup_path).map_err(|source| InstallError::Write {
        path: backup_path.clone(),
        source,
    })?;
    tracing::info!("backed up config to {}", backup_path.display());

    write_config(config_path, &patched)?;
    tracing::info!("patched {}", config_path.display());
    Ok(IniUpdate::Patched)
}

/// Produce the patched config text, or `None` when the startup script is
/// already configured.
///
/// If a `[Python]` section exists the line is inserted directly under its
/// header; otherwise a new section is appended at the end.
fn patch_config(existing: &str, startup_line: &str) -> Option<String> {
    if existing.contains(INIT_SCRIPT_NAME) {
        return None;
    }

    if existing.contains(PYTHON_SECTION) {
        return Some(existing.replacen(
            PYTHON_SECTION,
            &format!("{PYTHON_SECTION}\n{startup_line}"),
            1,
        ));
    }

    let mut patched = existing.to_string();
    if !patched.is_empty() && !patched.ends_with('\n') {
        patched.push('\n');
    }
    patched.push_str(&format!("\n{PYTHON_SECTION}\n{startup_line}\n"));
    Some(patched)
}

fn write_config(path: &Path, contents: &str) -> Result<(), InstallError> {
    fs::write(path, contents).map_err(|source| InstallError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("Config").join("DefaultEngine.ini");

        assert_eq!(enable_startup_script(&config).unwrap(), IniUpdate::Created);

        let contents = fs::read_to_string(&config).unwrap();
        assert_eq!(contents, "[Python]\n+StartupScripts=init_unreal.py\n");
    }

    #[test]
    fn test_inserts_into_existing_python_section() {
        let patched = patch_config(
            "[Core]\nkey=1\n\n[Python]\nOther=2\n",
            "+StartupScripts=init_unreal.py",
        )
        .unwrap();

        assert_eq!(
            patched,
            "[Core]\nkey=1\n\n[Python]\n+StartupScripts=init_unreal.py\nOther=2\n"
        );
    }

    #[test]
    fn test_appends_new_python_section() {
        let patched = patch_config("[Core]\nkey=1\n", "+StartupScripts=init_unreal.py").unwrap();
        assert_eq!(
            patched,
            "[Core]\nkey=1\n\n[Python]\n+StartupScripts=init_unreal.py\n"
        );
    }

    #[test]
    fn test_already_configured_is_detected() {
        assert!(patch_config(
            "[Python]\n+StartupScripts=init_unreal.py\n",
            "+StartupScripts=init_unreal.py"
        )
        .is_none());
    }

    #[test]
    fn test_patch_backs_up_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("DefaultEngine.ini");
        fs::write(&config, "[Core]\nkey=1\n").unwrap();

        assert_eq!(enable_startup_script(&config).unwrap(), IniUpdate::Patched);
        assert_eq!(
            fs::read_to_string(dir.path().join("DefaultEngine.ini.backup")).unwrap(),
            "[Core]\nkey=1\n"
        );

        // Second run finds the script configured and writes nothing.
        assert_eq!(
            enable_startup_script(&config).unwrap(),
            IniUpdate::AlreadyConfigured
        );
    }
}
