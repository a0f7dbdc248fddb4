use aiexec_domain::symbol::SymbolName;
use std::fmt;

/// One disagreement between the declared names and the location map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// Declared, but no location was recorded for it.
    Unmapped(SymbolName),
    /// Has a location, but was never declared.
    Undeclared(SymbolName),
    /// Declared more than once.
    Duplicate(SymbolName),
    /// Empty, dotted, or containing whitespace.
    Invalid(SymbolName),
}

impl Mismatch {
    #[must_use]
    pub const fn symbol(&self) -> &SymbolName {
        match self {
            Self::Unmapped(name)
            | Self::Undeclared(name)
            | Self::Duplicate(name)
            | Self::Invalid(name) => name,
        }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unmapped(name) => write!(f, "'{name}' is declared but has no location"),
            Self::Undeclared(name) => write!(f, "'{name}' has a location but is not declared"),
            Self::Duplicate(name) => write!(f, "'{name}' is declared more than once"),
            Self::Invalid(name) => write!(f, "'{name}' is not a valid symbol name"),
        }
    }
}

pub(crate) fn format_mismatches(mismatches: &[Mismatch]) -> String {
    mismatches.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
