//! The collect → resolve → dispatch pipeline.
//!
//! One menu click is one synchronous `run` on the caller's thread. The
//! pipeline holds no state across runs; a second click while an earlier
//! client window is still open simply launches an independent one.

use revlens_core::{DispatchOutcome, DispatchRequest, HistoryAction};

use crate::dispatch::Dispatcher;
use crate::notify::Notifier;
use crate::resolver::PackageResolver;
use crate::selection::SelectionProvider;

/// The assembled pipeline. Strategy selection happens here, at composition
/// time: hand in an `ExternalClientDispatcher` or a `HostHistoryDispatcher`.
pub struct HistoryPipeline<S, D, N> {
    selection: S,
    resolver: PackageResolver,
    dispatcher: D,
    notifier: N,
}

impl<S, D, N> HistoryPipeline<S, D, N>
where
    S: SelectionProvider,
    D: Dispatcher,
    N: Notifier,
{
    pub fn new(selection: S, resolver: PackageResolver, dispatcher: D, notifier: N) -> Self {
        Self {
            selection,
            resolver,
            dispatcher,
            notifier,
        }
    }

    /// Run the pipeline once for the current selection.
    ///
    /// Never returns an error: this executes inline with the host's menu
    /// event handling, so every failure is converted into a notification and
    /// reported as a plain outcome.
    pub fn run(&self, action: HistoryAction) -> DispatchOutcome {
        let selected = self.selection.selected_packages();
        if selected.is_empty() {
            tracing::debug!("nothing selected, nothing to do");
            return DispatchOutcome::EmptySelection;
        }

        let paths = self.resolver.resolve_batch(&selected);
        let Some(request) = DispatchRequest::new(action, paths) else {
            tracing::debug!("no selected package resolved to a file");
            return DispatchOutcome::NothingResolved;
        };

        match self.dispatcher.dispatch(request.action(), request.paths()) {
            Ok(()) => DispatchOutcome::Dispatched {
                path_count: request.path_count(),
            },
            Err(err) => {
                self.notifier.notify(&err.to_string());
                DispatchOutcome::Failed
            }
        }
    }
}
