//! Dispatch strategies.
//!
//! Two interchangeable implementations of the same contract, chosen at
//! composition time:
//! - `ExternalClientDispatcher` launches the external VCS client as a
//!   detached process
//! - `HostHistoryDispatcher` calls the host editor's built-in revision
//!   history capability directly
//!
//! Dispatch is fire-once: no retries, no timeouts, no handle to the launched
//! process or window.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use revlens_core::{ClientConfig, DispatchError, HistoryAction, ResolvedAssetPath};

/// The dispatch contract both strategies implement.
///
/// An empty path list is a no-op returning success; the external tool or host
/// UI is never invoked with zero arguments.
#[cfg_attr(test, mockall::automock)]
pub trait Dispatcher {
    fn dispatch(
        &self,
        action: HistoryAction,
        paths: &[ResolvedAssetPath],
    ) -> Result<(), DispatchError>;
}

// =============================================================================
// External-process strategy
// =============================================================================

/// Launches the external VCS GUI client with an action verb and path
/// arguments, detached.
///
/// The binary is never checked for existence up front; a failed launch is
/// reported as `ToolLaunchFailed` carrying the attempted command line.
#[derive(Debug, Clone)]
pub struct ExternalClientDispatcher {
    binary: String,
    select_args: Vec<String>,
    history_args: Vec<String>,
    working_dir: Option<PathBuf>,
}

impl ExternalClientDispatcher {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            binary: config.binary.clone(),
            select_args: config.select_args.clone(),
            history_args: config.history_args.clone(),
            working_dir: None,
        }
    }

    /// Run the client from this directory so it inherits the project's VCS
    /// connection settings (P4CONFIG and friends).
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    fn verb_args(&self, action: HistoryAction) -> &[String] {
        match action {
            HistoryAction::ShowInClient => &self.select_args,
            // The external client has no native-dialog analogue; its own
            // history view is the closest match.
            HistoryAction::ViewHistory | HistoryAction::ShowNativeHistory => &self.history_args,
        }
    }

    /// Render the command line for logging and launch-failure reporting.
    fn render_command(&self, action: HistoryAction, paths: &[ResolvedAssetPath]) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(1 + self.verb_args(action).len() + paths.len());
        parts.push(self.binary.clone());
        parts.extend(self.verb_args(action).iter().cloned());
        parts.extend(paths.iter().map(|p| p.to_string()));

        parts
            .iter()
            .map(|part| quote_if_needed(part))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Dispatcher for ExternalClientDispatcher {
    fn dispatch(
        &self,
        action: HistoryAction,
        paths: &[ResolvedAssetPath],
    ) -> Result<(), DispatchError> {
        if paths.is_empty() {
            return Ok(());
        }

        let mut command = Command::new(&self.binary);
        command.args(self.verb_args(action));
        for path in paths {
            command.arg(path.as_path());
        }
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        // Detached launch: the client gets no stdio and is never waited on.
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        match command.spawn() {
            Ok(child) => {
                tracing::info!(
                    "launched {} for {} path(s) (pid {})",
                    self.binary,
                    paths.len(),
                    child.id()
                );
                Ok(())
            }
            Err(source) => Err(DispatchError::ToolLaunchFailed {
                command: self.render_command(action, paths),
                source,
            }),
        }
    }
}

fn quote_if_needed(part: &str) -> String {
    if part.contains(char::is_whitespace) {
        format!("\"{part}\"")
    } else {
        part.to_string()
    }
}

// =============================================================================
// Host-capability strategy
// =============================================================================

/// The host editor's built-in revision history capability.
///
/// The embedding integration implements this against the real editor API.
/// `display_revision_history` opens a non-modal window; the dispatcher's
/// responsibility ends once the call returns, whether or not the window
/// actually appeared.
#[cfg_attr(test, mockall::automock)]
pub trait RevisionHistoryHost {
    /// Whether the capability is present and enabled.
    fn is_available(&self) -> bool;

    /// Display the history UI for the given files.
    fn display_revision_history(&self, paths: &[ResolvedAssetPath]);
}

/// Dispatches to the host editor's history dialog instead of a subprocess.
///
/// Every action shows the native history view; the host dialog covers both
/// "where is this file" and "what happened to it".
#[derive(Debug)]
pub struct HostHistoryDispatcher<H: RevisionHistoryHost> {
    host: H,
}

impl<H: RevisionHistoryHost> HostHistoryDispatcher<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }
}

impl<H: RevisionHistoryHost> Dispatcher for HostHistoryDispatcher<H> {
    fn dispatch(
        &self,
        _action: HistoryAction,
        paths: &[ResolvedAssetPath],
    ) -> Result<(), DispatchError> {
        if paths.is_empty() {
            return Ok(());
        }

        if !self.host.is_available() {
            return Err(DispatchError::HostCapabilityUnavailable);
        }

        self.host.display_revision_history(paths);
        tracing::info!("opened native revision history for {} path(s)", paths.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn abs(name: &str) -> ResolvedAssetPath {
        let root = if cfg!(windows) { r"C:\Content" } else { "/Content" };
        ResolvedAssetPath::new(PathBuf::from(root).join(name)).unwrap()
    }

    fn external(binary: &str) -> ExternalClientDispatcher {
        ExternalClientDispatcher::from_config(&ClientConfig {
            binary: binary.to_string(),
            ..ClientConfig::default()
        })
    }

    #[test]
    fn test_external_empty_paths_is_noop_success() {
        // The binary does not exist; success proves no launch was attempted.
        let dispatcher = external("revlens-test-binary-that-does-not-exist");
        assert!(dispatcher
            .dispatch(HistoryAction::ViewHistory, &[])
            .is_ok());
    }

    #[test]
    fn test_external_missing_binary_reports_launch_failure() {
        let dispatcher = external("revlens-test-binary-that-does-not-exist");
        let err = dispatcher
            .dispatch(HistoryAction::ViewHistory, &[abs("A.uasset")])
            .unwrap_err();

        match err {
            DispatchError::ToolLaunchFailed { command, .. } => {
                assert!(command.starts_with("revlens-test-binary-that-does-not-exist history"));
                assert!(command.contains("A.uasset"));
            }
            other => panic!("expected ToolLaunchFailed, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_external_launch_succeeds_with_real_binary() {
        let dispatcher = external("true");
        assert!(dispatcher
            .dispatch(HistoryAction::ShowInClient, &[abs("A.uasset")])
            .is_ok());
    }

    #[test]
    fn test_external_verb_mapping() {
        let dispatcher = external("p4vc");
        let paths = [abs("A.uasset")];

        let select = dispatcher.render_command(HistoryAction::ShowInClient, &paths);
        assert!(select.starts_with("p4vc workspacewindow -s"));

        let history = dispatcher.render_command(HistoryAction::ViewHistory, &paths);
        assert!(history.starts_with("p4vc history"));

        // No native dialog outside the host; falls back to the history view.
        let native = dispatcher.render_command(HistoryAction::ShowNativeHistory, &paths);
        assert!(native.starts_with("p4vc history"));
    }

    #[test]
    fn test_render_command_quotes_paths_with_spaces() {
        let dispatcher = external("p4vc");
        let paths = [abs("New Folder/A.uasset")];

        let rendered = dispatcher.render_command(HistoryAction::ViewHistory, &paths);
        assert!(rendered.contains('"'));
    }

    #[test]
    fn test_host_empty_paths_skips_capability_check() {
        let mut host = MockRevisionHistoryHost::new();
        host.expect_is_available().times(0);
        host.expect_display_revision_history().times(0);

        let dispatcher = HostHistoryDispatcher::new(host);
        assert!(dispatcher
            .dispatch(HistoryAction::ShowNativeHistory, &[])
            .is_ok());
    }

    #[test]
    fn test_host_unavailable_capability_is_reported() {
        let mut host = MockRevisionHistoryHost::new();
        host.expect_is_available().return_const(false);
        host.expect_display_revision_history().times(0);

        let dispatcher = HostHistoryDispatcher::new(host);
        let err = dispatcher
            .dispatch(HistoryAction::ShowNativeHistory, &[abs("A.uasset")])
            .unwrap_err();
        assert!(matches!(err, DispatchError::HostCapabilityUnavailable));
    }

    #[test]
    fn test_host_receives_all_paths_once() {
        let mut host = MockRevisionHistoryHost::new();
        host.expect_is_available().return_const(true);
        host.expect_display_revision_history()
            .withf(|paths| paths.len() == 2)
            .times(1)
            .return_const(());

        let dispatcher = HostHistoryDispatcher::new(host);
        assert!(dispatcher
            .dispatch(
                HistoryAction::ShowNativeHistory,
                &[abs("A.uasset"), abs("B.uasset")]
            )
            .is_ok());
    }
}
