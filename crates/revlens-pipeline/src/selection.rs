//! Selection collection.
//!
//! The host editor owns the asset-browser selection; the pipeline only reads
//! it, once, at the moment a menu action fires.

use revlens_core::PackageName;

/// Read-only access to the current asset-browser selection.
///
/// Implementations return the selected packages in the order the host reports
/// them, with no duplicates. An empty vector is the valid "nothing selected /
/// not in an asset-browser context" state, not an error.
#[cfg_attr(test, mockall::automock)]
pub trait SelectionProvider {
    fn selected_packages(&self) -> Vec<PackageName>;
}

/// A fixed selection, for command-line use and tests.
///
/// Host selections are inherently duplicate-free; command-line arguments are
/// not, so construction dedupes while preserving first-occurrence order.
#[derive(Debug, Clone, Default)]
pub struct StaticSelection {
    packages: Vec<PackageName>,
}

impl StaticSelection {
    pub fn new(packages: impl IntoIterator<Item = PackageName>) -> Self {
        let mut seen = std::collections::HashSet::new();
        let packages = packages
            .into_iter()
            .filter(|pkg| seen.insert(pkg.clone()))
            .collect();
        Self { packages }
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }
}

impl SelectionProvider for StaticSelection {
    fn selected_packages(&self) -> Vec<PackageName> {
        self.packages.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_selection_dedupes_preserving_order() {
        let selection = StaticSelection::new([
            PackageName::from("/Game/B"),
            PackageName::from("/Game/A"),
            PackageName::from("/Game/B"),
        ]);

        assert_eq!(
            selection.selected_packages(),
            vec![PackageName::from("/Game/B"), PackageName::from("/Game/A")]
        );
    }

    #[test]
    fn test_empty_selection_is_valid() {
        let selection = StaticSelection::new([]);
        assert!(selection.is_empty());
        assert!(selection.selected_packages().is_empty());
    }
}
