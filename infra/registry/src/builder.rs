use crate::cache::ResolutionCache;
use crate::declared::DeclaredSymbols;
use crate::error::RegistryError;
use crate::loader::Loader;
use crate::location::LocationMap;
use crate::registry::{Registry, RegistryInner};
use crate::validator::validate;
use aiexec_domain::symbol::{Location, SymbolName};
use private::Sealed;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct NoLoader;
pub struct WithLoader(Arc<dyn Loader>);

impl fmt::Debug for WithLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WithLoader(..)")
    }
}

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoLoader {}
impl Sealed for WithLoader {}

/// Collects the declared names, their locations and the loader of one registry.
///
/// Nothing is checked until [`RegistryBuilder::build`], which validates the
/// whole configuration at once.
#[allow(private_bounds)]
#[derive(Debug)]
pub struct RegistryBuilder<S: Sealed = NoLoader> {
    namespace: Arc<str>,
    declared: Vec<SymbolName>,
    locations: LocationMap,
    state: S,
}

#[allow(private_bounds)]
impl<S: Sealed> RegistryBuilder<S> {
    #[must_use = "Adds names to the declared set"]
    pub fn declare<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<SymbolName>,
    {
        self.declared.extend(names.into_iter().map(Into::into));
        self
    }

    #[must_use = "Records where a name is loaded from"]
    pub fn locate(mut self, name: impl Into<SymbolName>, location: Location) -> Self {
        self.locations.insert(name, location);
        self
    }

    #[must_use = "Records where names are loaded from"]
    pub fn locations<I, N>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (N, Location)>,
        N: Into<SymbolName>,
    {
        self.locations.extend(entries);
        self
    }

    /// Locates `name` at the sub-module `<namespace>.<name>`, which is itself the implementation.
    #[must_use = "Records where a name is loaded from"]
    pub fn submodule(self, name: &str) -> Self {
        let location = Location::relative(&self.namespace, name);
        self.locate(name, location)
    }

    /// Locates `name` as the attribute `name` of the sub-module `<namespace>.<module>`.
    #[must_use = "Records where a name is loaded from"]
    pub fn export(self, name: &str, module: &str) -> Self {
        let location = Location::relative(&self.namespace, module).with_attribute(name);
        self.locate(name, location)
    }

    fn transition<N: Sealed>(self, state: N) -> RegistryBuilder<N> {
        RegistryBuilder {
            namespace: self.namespace,
            declared: self.declared,
            locations: self.locations,
            state,
        }
    }
}

impl RegistryBuilder<NoLoader> {
    #[must_use = "Creates a registry builder for the given namespace"]
    pub fn new(namespace: impl Into<Arc<str>>) -> Self {
        Self {
            namespace: namespace.into(),
            declared: Vec::new(),
            locations: LocationMap::new(),
            state: NoLoader,
        }
    }

    #[must_use = "Sets the loader invoked on cache misses"]
    pub fn loader(self, loader: impl Loader) -> RegistryBuilder<WithLoader> {
        self.transition(WithLoader(Arc::new(loader)))
    }

    /// Same as [`RegistryBuilder::loader`] for a loader that is already shared.
    #[must_use = "Sets the loader invoked on cache misses"]
    pub fn shared_loader(self, loader: Arc<dyn Loader>) -> RegistryBuilder<WithLoader> {
        self.transition(WithLoader(loader))
    }
}

impl RegistryBuilder<WithLoader> {
    /// Validates the configuration and returns the registry.
    ///
    /// # Errors
    /// [`RegistryError::Construction`] listing every mismatched name when the
    /// declared names and the location map disagree.
    pub fn build(self) -> Result<Registry, RegistryError> {
        let declared = DeclaredSymbols::new(self.declared);
        assemble(self.namespace, declared, self.locations, self.state.0)
    }
}

/// Builds a registry from already collected parts.
///
/// # Errors
/// [`RegistryError::Construction`] when `declared` and `mapping` disagree.
pub fn build_registry(
    namespace: impl Into<Arc<str>>,
    declared: DeclaredSymbols,
    mapping: LocationMap,
    loader: impl Loader,
) -> Result<Registry, RegistryError> {
    assemble(namespace.into(), declared, mapping, Arc::new(loader))
}

fn assemble(
    namespace: Arc<str>,
    declared: DeclaredSymbols,
    locations: LocationMap,
    loader: Arc<dyn Loader>,
) -> Result<Registry, RegistryError> {
    if let Err(mismatches) = validate(&declared, &locations) {
        debug!(namespace = %namespace, mismatches = mismatches.len(), "Registry rejected");
        return Err(RegistryError::Construction { namespace, mismatches, context: None });
    }

    let cache = ResolutionCache::new(declared.all_names());
    info!(namespace = %namespace, symbols = declared.len(), "Registry constructed");

    Ok(Registry {
        inner: Arc::new(RegistryInner {
            namespace,
            declared,
            locations,
            cache,
            loader,
            loads: AtomicU64::new(0),
            failures: AtomicU64::new(0),
        }),
    })
}
