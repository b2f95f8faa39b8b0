//! History actions and dispatch requests.

use serde::{Deserialize, Serialize};

use crate::asset::ResolvedAssetPath;

/// What the user asked the context menu to do with the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryAction {
    /// Reveal and select the files in the external client's workspace view.
    ShowInClient,
    /// Open the external client's revision history view.
    ViewHistory,
    /// Open the host editor's built-in revision history dialog.
    ShowNativeHistory,
}

/// One dispatchable unit: an action plus the resolved paths it applies to.
///
/// A request with zero paths cannot be constructed; callers short-circuit
/// instead of handing the dispatcher an empty argument list.
#[derive(Debug, Clone)]
pub struct DispatchRequest {
    action: HistoryAction,
    paths: Vec<ResolvedAssetPath>,
}

impl DispatchRequest {
    /// Build a request, or `None` when nothing resolved.
    pub fn new(action: HistoryAction, paths: Vec<ResolvedAssetPath>) -> Option<Self> {
        if paths.is_empty() {
            None
        } else {
            Some(Self { action, paths })
        }
    }

    pub fn action(&self) -> HistoryAction {
        self.action
    }

    pub fn paths(&self) -> &[ResolvedAssetPath] {
        &self.paths
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }
}

/// How a single pipeline run ended.
///
/// The pipeline never propagates an error to the caller; failures are turned
/// into notifications and reported here as a plain value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The dispatcher accepted this many paths.
    Dispatched { path_count: usize },
    /// Nothing was selected; nothing to do.
    EmptySelection,
    /// Entries were selected but none resolved to an on-disk file.
    NothingResolved,
    /// The dispatcher reported a failure; the user was notified.
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn abs(path: &str) -> ResolvedAssetPath {
        let root = if cfg!(windows) { r"C:\" } else { "/" };
        ResolvedAssetPath::new(PathBuf::from(root).join(path)).unwrap()
    }

    #[test]
    fn test_request_requires_paths() {
        assert!(DispatchRequest::new(HistoryAction::ViewHistory, Vec::new()).is_none());
    }

    #[test]
    fn test_request_preserves_order() {
        let request = DispatchRequest::new(
            HistoryAction::ShowInClient,
            vec![abs("a.uasset"), abs("b.uasset")],
        )
        .unwrap();

        assert_eq!(request.path_count(), 2);
        assert!(request.paths()[0].as_path().ends_with("a.uasset"));
        assert!(request.paths()[1].as_path().ends_with("b.uasset"));
    }
}
