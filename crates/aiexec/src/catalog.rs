use aiexec_registry::{RegistryError, SymbolName};

/// Leaf components of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListing {
    pub category: SymbolName,
    pub components: Vec<SymbolName>,
}

/// Every category with its components, as shown by catalog tooling.
#[derive(Debug, Default)]
pub struct Catalog {
    /// Categories that resolved, in listing order.
    pub categories: Vec<CategoryListing>,
    /// Categories whose module could not be loaded.
    pub unavailable: Vec<(SymbolName, RegistryError)>,
}

impl Catalog {
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&CategoryListing> {
        self.categories.iter().find(|listing| listing.category == name)
    }

    /// Total number of listed leaf components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.categories.iter().map(|listing| listing.components.len()).sum()
    }

    #[must_use]
    pub fn is_unavailable(&self, name: &str) -> bool {
        self.unavailable.iter().any(|(category, _)| category == name)
    }
}
