//! Names and locations of lazily loadable units.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Separator between segments of a nested symbol path (`processing.PromptComponent`).
pub const PATH_SEPARATOR: char = '.';

/// Immutable name of one loadable unit, unique within a registry.
///
/// Cloning is a reference-count bump. Lookups by `&str` work through [`Borrow`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolName(Arc<str>);

impl SymbolName {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A valid name is non-empty and contains neither the path separator nor whitespace.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_valid_name(&self.0)
    }
}

/// Same rule as [`SymbolName::is_valid`] for borrowed input.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(PATH_SEPARATOR) && !name.chars().any(char::is_whitespace)
}

impl Deref for SymbolName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for SymbolName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SymbolName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SymbolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SymbolName {
    fn from(name: &str) -> Self {
        Self(name.into())
    }
}

impl From<String> for SymbolName {
    fn from(name: String) -> Self {
        Self(name.into())
    }
}

impl PartialEq<str> for SymbolName {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for SymbolName {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// Where an implementation lives: a module path, optionally narrowed to a
/// named attribute nested inside that module.
///
/// * `Location::module("aiexec.components.processing")` - the module itself is the unit.
/// * `Location::attribute("aiexec.components.processing.prompt", "PromptComponent")` -
///   the unit is one export of a larger module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    module: Arc<str>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    attribute: Option<Arc<str>>,
}

impl Location {
    pub fn module(path: impl Into<Arc<str>>) -> Self {
        Self { module: path.into(), attribute: None }
    }

    pub fn attribute(path: impl Into<Arc<str>>, attribute: impl Into<Arc<str>>) -> Self {
        Self { module: path.into(), attribute: Some(attribute.into()) }
    }

    /// Joins `package` and `module` with the path separator.
    #[must_use]
    pub fn relative(package: &str, module: &str) -> Self {
        Self::module(format!("{package}{PATH_SEPARATOR}{module}"))
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<Arc<str>>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    #[must_use]
    pub fn module_path(&self) -> &str {
        &self.module
    }

    #[must_use]
    pub fn attribute_name(&self) -> Option<&str> {
        self.attribute.as_deref()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.attribute {
            Some(attribute) => write!(f, "{}:{attribute}", self.module),
            None => f.write_str(&self.module),
        }
    }
}
