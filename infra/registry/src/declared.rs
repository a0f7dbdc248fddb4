use aiexec_domain::symbol::SymbolName;
use std::sync::Arc;

/// The names a registry promises to provide, in declaration order.
///
/// Duplicates are kept here so validation can report them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclaredSymbols {
    names: Arc<[SymbolName]>,
}

impl DeclaredSymbols {
    pub fn new<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<SymbolName>,
    {
        names.into_iter().collect()
    }

    #[must_use]
    pub fn all_names(&self) -> &[SymbolName] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<N: Into<SymbolName>> FromIterator<N> for DeclaredSymbols {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self { names: iter.into_iter().map(Into::into).collect() }
    }
}
