//! An in-process module table and the loader that imports from it.
//!
//! Modules are registered as factories under their dotted path and built on
//! first import. A module either is the implementation itself (a category
//! package exposing its nested registry) or exports named attributes.

use crate::error::{LoadError, LoadErrorExt};
use crate::loader::{Loader, Resolved};
use aiexec_domain::symbol::{Location, SymbolName};
use fxhash::FxHashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Builds a module. Receives the table so nested registries can import siblings.
pub type ModuleFactory = dyn Fn(&ModuleTable) -> Result<Module, LoadError> + Send + Sync;

/// The contents of one imported module.
#[derive(Debug, Clone, Default)]
pub struct Module {
    itself: Option<Resolved>,
    exports: FxHashMap<SymbolName, Resolved>,
}

impl Module {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A module that is itself the implementation of the symbol pointing at it.
    pub fn itself(resolved: impl Into<Resolved>) -> Self {
        Self { itself: Some(resolved.into()), exports: FxHashMap::default() }
    }

    #[must_use]
    pub fn export(mut self, name: impl Into<SymbolName>, resolved: impl Into<Resolved>) -> Self {
        self.exports.insert(name.into(), resolved.into());
        self
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Resolved> {
        self.exports.get(name)
    }

    #[must_use]
    pub const fn as_resolved(&self) -> Option<&Resolved> {
        self.itself.as_ref()
    }

    pub fn exported_names(&self) -> impl Iterator<Item = &SymbolName> {
        self.exports.keys()
    }
}

/// Read-only table of module factories keyed by dotted path.
#[derive(Clone, Default)]
pub struct ModuleTable {
    factories: Arc<FxHashMap<Arc<str>, Arc<ModuleFactory>>>,
}

impl ModuleTable {
    pub fn builder() -> ModuleTableBuilder {
        ModuleTableBuilder::default()
    }

    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.factories.contains_key(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Registered module paths, sorted.
    #[must_use]
    pub fn paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.factories.keys().map(AsRef::as_ref).collect();
        paths.sort_unstable();
        paths
    }

    /// Imports the module at `path`.
    ///
    /// # Errors
    /// [`LoadError::NotFound`] if nothing is registered under `path`, or
    /// whatever the module factory returns.
    pub fn import(&self, path: &str) -> Result<Module, LoadError> {
        let Some(factory) = self.factories.get(path) else {
            return Err(LoadError::not_found(format!("No module named '{path}'")));
        };
        trace!(module = path, "Importing module");
        factory(self).context(format!("while importing '{path}'"))
    }
}

impl fmt::Debug for ModuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleTable").field("modules", &self.paths()).finish()
    }
}

#[derive(Default)]
#[must_use = "builders do nothing unless you call .build()"]
pub struct ModuleTableBuilder {
    factories: FxHashMap<Arc<str>, Arc<ModuleFactory>>,
}

impl ModuleTableBuilder {
    /// Registers `factory` under `path`. A later registration replaces an earlier one.
    pub fn module<F>(mut self, path: impl Into<Arc<str>>, factory: F) -> Self
    where
        F: Fn(&ModuleTable) -> Result<Module, LoadError> + Send + Sync + 'static,
    {
        let path = path.into();
        if self.factories.insert(Arc::clone(&path), Arc::new(factory)).is_some() {
            debug!(module = %path, "Module factory replaced");
        }
        self
    }

    /// Hands the builder to an installer, typically a category crate's `install`.
    pub fn install(self, installer: impl FnOnce(Self) -> Self) -> Self {
        installer(self)
    }

    pub fn build(self) -> ModuleTable {
        ModuleTable { factories: Arc::new(self.factories) }
    }
}

impl fmt::Debug for ModuleTableBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleTableBuilder").field("modules", &self.factories.len()).finish()
    }
}

/// Loader that imports locations from a [`ModuleTable`].
///
/// * no module at the location's path: [`LoadError::NotFound`]
/// * location names an attribute the module lacks: [`LoadError::LoadFailure`]
/// * location names the module itself but the module is not an implementation:
///   [`LoadError::LoadFailure`]
#[derive(Debug, Clone)]
pub struct ModuleLoader {
    table: ModuleTable,
}

impl ModuleLoader {
    #[must_use]
    pub const fn new(table: ModuleTable) -> Self {
        Self { table }
    }

    #[must_use]
    pub const fn table(&self) -> &ModuleTable {
        &self.table
    }
}

impl Loader for ModuleLoader {
    fn load(&self, _name: &SymbolName, location: &Location) -> Result<Resolved, LoadError> {
        let path = location.module_path();
        let module = self.table.import(path)?;

        match location.attribute_name() {
            Some(attribute) => module.attribute(attribute).cloned().ok_or_else(|| {
                LoadError::failure(format!("module '{path}' has no attribute '{attribute}'"))
            }),
            None => module.as_resolved().cloned().ok_or_else(|| {
                LoadError::failure(format!("module '{path}' is not an implementation"))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Marker;

    impl aiexec_domain::component::Component for Marker {
        fn kind(&self) -> &'static str {
            "marker"
        }

        fn as_any(&self) -> &dyn std::any::Any {
            self
        }
    }

    fn table() -> ModuleTable {
        ModuleTable::builder()
            .module("pkg.leaf", |_: &ModuleTable| {
                Ok(Module::new().export("Marker", Resolved::component(Marker)))
            })
            .module("pkg.broken", |_: &ModuleTable| Err(LoadError::failure("syntax error")))
            .build()
    }

    #[test]
    fn imports_exported_attribute() {
        let loader = ModuleLoader::new(table());
        let resolved = loader
            .load(&"Marker".into(), &Location::attribute("pkg.leaf", "Marker"))
            .expect("attribute loads");
        assert!(resolved.downcast_ref::<Marker>().is_some());
    }

    #[test]
    fn missing_module_is_not_found() {
        let loader = ModuleLoader::new(table());
        let err = loader.load(&"Gone".into(), &Location::module("pkg.gone")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn missing_attribute_is_load_failure() {
        let loader = ModuleLoader::new(table());
        let err =
            loader.load(&"Other".into(), &Location::attribute("pkg.leaf", "Other")).unwrap_err();
        assert!(matches!(err, LoadError::LoadFailure { .. }));
        assert!(err.to_string().contains("no attribute 'Other'"));
    }

    #[test]
    fn module_without_self_export_is_load_failure() {
        let loader = ModuleLoader::new(table());
        let err = loader.load(&"leaf".into(), &Location::module("pkg.leaf")).unwrap_err();
        assert!(matches!(err, LoadError::LoadFailure { .. }));
    }

    #[test]
    fn factory_errors_carry_import_context() {
        let err = table().import("pkg.broken").unwrap_err();
        assert_eq!(err.to_string(), "Load failure (while importing 'pkg.broken'): syntax error");
    }
}
