//! Context-menu registration.
//!
//! The asset-browser entries are process-wide host state with editor-lifetime
//! scope: registered once at startup, unregistered at shutdown. The registry
//! makes both transitions explicit instead of leaning on ambient globals.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use revlens_core::HistoryAction;

/// One asset context-menu entry, bound to the action it triggers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Stable identifier, used for unregistration.
    pub id: String,

    /// Display text in the context menu.
    pub label: String,

    /// Tooltip text.
    pub tooltip: String,

    /// Pipeline action to run when the entry fires.
    pub action: HistoryAction,
}

impl MenuEntry {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        tooltip: impl Into<String>,
        action: HistoryAction,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            tooltip: tooltip.into(),
            action,
        }
    }
}

/// The standard entry set: reveal in the external client, and view history.
pub fn default_entries() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new(
            "revlens.show_in_client",
            "Show in P4",
            "Open the version-control client and select this file",
            HistoryAction::ShowInClient,
        ),
        MenuEntry::new(
            "revlens.view_history",
            "View Revision History",
            "Open the revision history for this file",
            HistoryAction::ViewHistory,
        ),
    ]
}

/// Errors from menu registration.
#[derive(Debug, thiserror::Error)]
pub enum MenuRegistryError {
    #[error("menu entry already registered: {0}")]
    DuplicateEntry(String),
}

/// Holds the registered context-menu entries.
///
/// The host queries `entries()` to build its menu and maps a clicked entry id
/// back to its action via `action_for`.
#[derive(Debug, Default)]
pub struct MenuRegistry {
    entries: RwLock<Vec<MenuEntry>>,
}

impl MenuRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one entry. Ids must be unique.
    pub fn register(&self, entry: MenuEntry) -> Result<(), MenuRegistryError> {
        let mut entries = self.entries.write();
        if entries.iter().any(|existing| existing.id == entry.id) {
            return Err(MenuRegistryError::DuplicateEntry(entry.id));
        }

        tracing::debug!("registered menu entry '{}'", entry.id);
        entries.push(entry);
        Ok(())
    }

    /// Remove one entry by id. Returns true if it was registered.
    pub fn unregister(&self, id: &str) -> bool {
        let mut entries = self.entries.write();
        if let Some(pos) = entries.iter().position(|entry| entry.id == id) {
            entries.remove(pos);
            tracing::debug!("unregistered menu entry '{id}'");
            true
        } else {
            false
        }
    }

    /// Remove everything; called at editor shutdown.
    pub fn unregister_all(&self) {
        let mut entries = self.entries.write();
        tracing::debug!("unregistered {} menu entries", entries.len());
        entries.clear();
    }

    /// Snapshot of the registered entries, in registration order.
    pub fn entries(&self) -> Vec<MenuEntry> {
        self.entries.read().clone()
    }

    /// The action bound to an entry id, if registered.
    pub fn action_for(&self, id: &str) -> Option<HistoryAction> {
        self.entries
            .read()
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.action)
    }

    pub fn entry_count(&self) -> usize {
        self.entries.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let registry = MenuRegistry::new();
        for entry in default_entries() {
            registry.register(entry).unwrap();
        }

        assert_eq!(registry.entry_count(), 2);
        assert_eq!(
            registry.action_for("revlens.view_history"),
            Some(HistoryAction::ViewHistory)
        );
        assert_eq!(registry.action_for("revlens.unknown"), None);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let registry = MenuRegistry::new();
        let entry = MenuEntry::new("revlens.x", "X", "", HistoryAction::ViewHistory);

        registry.register(entry.clone()).unwrap();
        assert!(matches!(
            registry.register(entry),
            Err(MenuRegistryError::DuplicateEntry(_))
        ));
        assert_eq!(registry.entry_count(), 1);
    }

    #[test]
    fn test_unregister_lifecycle() {
        let registry = MenuRegistry::new();
        for entry in default_entries() {
            registry.register(entry).unwrap();
        }

        assert!(registry.unregister("revlens.show_in_client"));
        assert!(!registry.unregister("revlens.show_in_client"));
        assert_eq!(registry.entry_count(), 1);

        registry.unregister_all();
        assert_eq!(registry.entry_count(), 0);
    }
}
