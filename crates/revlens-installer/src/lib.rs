//! Project provisioning for the revlens context-menu integration.
//!
//! Installs the editor-side startup scripts into an Unreal project and
//! enables them in `DefaultEngine.ini`:
//! - `project` - locate the project root (`*.uproject` upward search)
//! - `workspace` - detect the Perforce workspace root
//! - `scripts` - write the bundled startup scripts into `Content/Python/`
//! - `engine_ini` - idempotent `[Python]` startup-script patch with backup

mod engine_ini;
mod error;
mod project;
mod scripts;
mod workspace;

pub use engine_ini::{enable_startup_script, IniUpdate};
pub use error::InstallError;
pub use project::find_project_root;
pub use scripts::{install_scripts, INIT_SCRIPT_NAME, MENU_SCRIPT_NAME};
pub use workspace::{detect_workspace, Workspace, WorkspaceSource};
