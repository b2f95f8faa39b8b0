//! Core types for the revlens asset history toolkit.
//!
//! This crate contains shared data structures used across all revlens crates:
//! - Package and resolved-path types
//! - History actions and dispatch requests
//! - Configuration types
//! - Error types

mod action;
mod asset;
mod config;
mod error;

pub use action::{DispatchOutcome, DispatchRequest, HistoryAction};
pub use asset::{PackageName, ResolvedAssetPath};
pub use config::{user_config_path, AppConfig, ClientConfig, ResolverConfig, PROJECT_CONFIG_FILE};
pub use error::{ConfigError, DispatchError, ResolveError};
