use crate::builder::{NoLoader, RegistryBuilder};
use crate::cache::{ResolutionCache, SymbolState};
use crate::declared::DeclaredSymbols;
use crate::error::{LoadError, RegistryError};
use crate::loader::{Loader, Resolved};
use crate::location::LocationMap;
use aiexec_domain::symbol::{Location, PATH_SEPARATOR, SymbolName};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace};

/// Counters of one registry. Nested registries keep their own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryStats {
    pub declared: usize,
    pub resolved: usize,
    /// Loader invocations, successful or not.
    pub loads: u64,
    pub failures: u64,
}

pub(crate) struct RegistryInner {
    pub(crate) namespace: Arc<str>,
    pub(crate) declared: DeclaredSymbols,
    pub(crate) locations: LocationMap,
    pub(crate) cache: ResolutionCache,
    pub(crate) loader: Arc<dyn Loader>,
    pub(crate) loads: AtomicU64,
    pub(crate) failures: AtomicU64,
}

/// A namespace of lazily loaded symbols.
///
/// The declared names are fixed at construction. A symbol is loaded on first
/// access and served from the cache afterwards; failed loads are never cached.
/// Cloning is cheap and every clone shares the same cache.
#[derive(Clone)]
pub struct Registry {
    pub(crate) inner: Arc<RegistryInner>,
}

impl Registry {
    #[must_use = "Creates a registry builder for the given namespace"]
    pub fn builder(namespace: impl Into<Arc<str>>) -> RegistryBuilder<NoLoader> {
        RegistryBuilder::new(namespace)
    }

    /// Returns the implementation behind `name`, loading it on first access.
    ///
    /// Concurrent first accesses to the same name run the loader once; the
    /// other callers wait and receive the same instance.
    ///
    /// # Errors
    /// * [`RegistryError::UnknownSymbol`] if `name` is not declared.
    /// * [`RegistryError::UnresolvableSymbol`] if the loader fails. Nothing is
    ///   cached, so a later call tries again.
    pub fn get_symbol(&self, name: &str) -> Result<Resolved, RegistryError> {
        let Some((symbol, slot)) = self.inner.cache.slot(name) else {
            return Err(self.unknown(name));
        };

        if let Some(resolved) = slot.get() {
            trace!(namespace = %self.inner.namespace, symbol = name, "Cache hit");
            return Ok(resolved.clone());
        }

        let Some(location) = self.inner.locations.location_of(name) else {
            return Err(self.unresolvable(name, LoadError::failure("no location recorded")));
        };

        slot.get_or_try_init(|| {
            self.inner.loads.fetch_add(1, Ordering::Relaxed);
            debug!(namespace = %self.inner.namespace, symbol = name, %location, "Loading symbol");
            self.inner.loader.load(symbol, location)
        })
        .map_err(|source| {
            self.inner.failures.fetch_add(1, Ordering::Relaxed);
            debug!(namespace = %self.inner.namespace, symbol = name, error = %source, "Load failed");
            self.unresolvable(name, source)
        })
    }

    /// Resolves a dotted path, descending into nested registries
    /// (`processing.PromptComponent`).
    ///
    /// # Errors
    /// * [`RegistryError::InvalidPath`] if the path has an empty segment or
    ///   walks through a component.
    /// * Any error of [`Registry::get_symbol`] at the failing level.
    pub fn resolve_path(&self, path: &str) -> Result<Resolved, RegistryError> {
        if path.split(PATH_SEPARATOR).any(str::is_empty) {
            return Err(RegistryError::InvalidPath {
                path: path.to_owned(),
                message: "empty path segment".into(),
                context: None,
            });
        }

        let mut segments = path.split(PATH_SEPARATOR);
        let mut current = self.get_symbol(segments.next().unwrap_or(path))?;

        for segment in segments {
            let Resolved::Registry(registry) = current else {
                return Err(RegistryError::InvalidPath {
                    path: path.to_owned(),
                    message: format!("cannot descend into component before '{segment}'").into(),
                    context: None,
                });
            };
            current = registry.get_symbol(segment)?;
        }

        Ok(current)
    }

    /// The value at `path` if every segment is already cached. Never loads.
    pub(crate) fn cached(&self, path: &str) -> Option<Resolved> {
        let mut segments = path.split(PATH_SEPARATOR);
        let mut current = self.cached_symbol(segments.next()?)?;
        for segment in segments {
            current = current.as_registry()?.cached_symbol(segment)?;
        }
        Some(current)
    }

    fn cached_symbol(&self, name: &str) -> Option<Resolved> {
        self.inner.cache.slot(name)?.1.get().cloned()
    }

    /// Every declared name, in declaration order. Never triggers a load.
    #[must_use]
    pub fn list_symbols(&self) -> &[SymbolName] {
        self.inner.declared.all_names()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.inner.cache.slot(name).is_some()
    }

    #[must_use]
    pub fn location_of(&self, name: &str) -> Option<&Location> {
        self.inner.locations.location_of(name)
    }

    /// Resolution state of `name`, `None` if it is not declared.
    #[must_use]
    pub fn state(&self, name: &str) -> Option<SymbolState> {
        self.inner.cache.slot(name).map(|(_, slot)| slot.state())
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.inner.namespace
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.declared.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.declared.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            declared: self.inner.declared.len(),
            resolved: self.inner.cache.resolved_count(),
            loads: self.inner.loads.load(Ordering::Relaxed),
            failures: self.inner.failures.load(Ordering::Relaxed),
        }
    }

    /// Whether both handles share one cache.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn unknown(&self, name: &str) -> RegistryError {
        RegistryError::UnknownSymbol {
            name: name.into(),
            namespace: Arc::clone(&self.inner.namespace),
            context: None,
        }
    }

    pub(crate) fn unresolvable(&self, name: &str, source: LoadError) -> RegistryError {
        RegistryError::UnresolvableSymbol {
            name: name.into(),
            namespace: Arc::clone(&self.inner.namespace),
            source,
            context: None,
        }
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("namespace", &self.inner.namespace)
            .field("declared", &self.inner.declared.len())
            .field("resolved", &self.inner.cache.resolved_count())
            .finish_non_exhaustive()
    }
}
