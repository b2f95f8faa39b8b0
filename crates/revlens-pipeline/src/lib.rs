//! Selection-to-history dispatch pipeline.
//!
//! This crate provides the pieces a host editor integration composes:
//! - `SelectionProvider` - reads the asset-browser selection at click time
//! - `PackageResolver` - maps package names onto on-disk content files
//! - `Dispatcher` - hands resolved paths to an external client or the host
//! - `MenuRegistry` - explicit registration of the context-menu entries
//! - `HistoryPipeline` - one synchronous collect → resolve → dispatch run
//!
//! Every menu click is a fresh, independent pipeline run on the caller's
//! thread. The only asynchronous element is the detached process or host
//! window a dispatcher opens, which is never waited on.

pub mod dispatch;
pub mod menu;
pub mod notify;
pub mod pipeline;
pub mod resolver;
pub mod selection;

pub use dispatch::{
    Dispatcher, ExternalClientDispatcher, HostHistoryDispatcher, RevisionHistoryHost,
};
pub use menu::{default_entries, MenuEntry, MenuRegistry, MenuRegistryError};
pub use notify::{LogNotifier, Notifier};
pub use pipeline::HistoryPipeline;
pub use resolver::PackageResolver;
pub use selection::{SelectionProvider, StaticSelection};

// Re-export revlens_core types for convenience
pub use revlens_core::{
    DispatchError, DispatchOutcome, DispatchRequest, HistoryAction, PackageName, ResolveError,
    ResolvedAssetPath,
};
