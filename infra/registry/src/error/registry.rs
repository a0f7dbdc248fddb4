use super::{LoadError, Mismatch, mismatch::format_mismatches};
use aiexec_domain::symbol::SymbolName;
use std::borrow::Cow;
use std::sync::Arc;

/// Errors surfaced by registry construction and lookup.
#[aiexec_derive::aiexec_error]
pub enum RegistryError {
    /// Declared names and the location map disagree. Fatal at startup.
    #[error(
        "Registry '{namespace}' is inconsistent{}: {}",
        format_context(.context),
        format_mismatches(.mismatches)
    )]
    Construction {
        namespace: Arc<str>,
        mismatches: Vec<Mismatch>,
        context: Option<Cow<'static, str>>,
    },

    /// The name is not part of the declared set.
    #[error("Unknown symbol '{name}' in '{namespace}'{}", format_context(.context))]
    UnknownSymbol { name: SymbolName, namespace: Arc<str>, context: Option<Cow<'static, str>> },

    /// The name is declared but the loader could not produce it. Not cached.
    #[error("Could not resolve '{name}' from '{namespace}'{}: {source}", format_context(.context))]
    UnresolvableSymbol {
        name: SymbolName,
        namespace: Arc<str>,
        source: LoadError,
        context: Option<Cow<'static, str>>,
    },

    /// A dotted path is malformed or walks through a component.
    #[error("Invalid symbol path '{path}'{}: {message}", format_context(.context))]
    InvalidPath { path: String, message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl RegistryError {
    /// The symbol a lookup failed on.
    #[must_use]
    pub const fn symbol(&self) -> Option<&SymbolName> {
        match self {
            Self::UnknownSymbol { name, .. } | Self::UnresolvableSymbol { name, .. } => Some(name),
            Self::Construction { .. } | Self::InvalidPath { .. } => None,
        }
    }

    /// Every mismatched name of a construction failure, empty for other kinds.
    #[must_use]
    pub fn mismatches(&self) -> &[Mismatch] {
        match self {
            Self::Construction { mismatches, .. } => mismatches,
            _ => &[],
        }
    }

    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::UnknownSymbol { .. })
    }

    #[must_use]
    pub const fn is_unresolvable(&self) -> bool {
        matches!(self, Self::UnresolvableSymbol { .. })
    }
}
