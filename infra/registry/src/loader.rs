//! The pluggable acquisition step and what it produces.

use crate::error::LoadError;
use crate::registry::Registry;
use aiexec_domain::component::{Component, ComponentRef};
use aiexec_domain::symbol::{Location, SymbolName};

/// Acquires the implementation behind a symbol.
///
/// Called only on a cache miss, and at most once at a time per symbol. A
/// loader may be invoked again for the same symbol after it failed.
///
/// A loader may resolve other symbols of its own registry. Asking for the
/// symbol being loaded, directly or through a chain on the same thread, fails
/// with a circular import [`LoadError::LoadFailure`]. A cycle that crosses
/// threads is not detected and blocks.
///
/// Any `Fn(&SymbolName, &Location) -> Result<Resolved, LoadError>` closure is a loader.
pub trait Loader: Send + Sync + 'static {
    /// # Errors
    /// [`LoadError::NotFound`] when the module does not exist,
    /// [`LoadError::LoadFailure`] for any other acquisition problem.
    fn load(&self, name: &SymbolName, location: &Location) -> Result<Resolved, LoadError>;
}

impl<F> Loader for F
where
    F: Fn(&SymbolName, &Location) -> Result<Resolved, LoadError> + Send + Sync + 'static,
{
    fn load(&self, name: &SymbolName, location: &Location) -> Result<Resolved, LoadError> {
        self(name, location)
    }
}

/// Pins a closure to the loader signature so its argument and return types
/// are inferred at the call site.
pub const fn loader_fn<F>(f: F) -> F
where
    F: Fn(&SymbolName, &Location) -> Result<Resolved, LoadError> + Send + Sync + 'static,
{
    f
}

/// A loaded implementation: a leaf component or a nested registry.
#[derive(Debug, Clone)]
pub enum Resolved {
    Component(ComponentRef),
    Registry(Registry),
}

impl Resolved {
    pub fn component<T: Component>(component: T) -> Self {
        Self::Component(ComponentRef::new(component))
    }

    #[must_use]
    pub const fn as_component(&self) -> Option<&ComponentRef> {
        match self {
            Self::Component(component) => Some(component),
            Self::Registry(_) => None,
        }
    }

    #[must_use]
    pub const fn as_registry(&self) -> Option<&Registry> {
        match self {
            Self::Registry(registry) => Some(registry),
            Self::Component(_) => None,
        }
    }

    /// The concrete component if this is a `T` leaf.
    #[must_use]
    pub fn downcast_ref<T: Component>(&self) -> Option<&T> {
        self.as_component().and_then(ComponentRef::downcast_ref::<T>)
    }

    /// Whether both values are the same loaded instance, not merely equal.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Component(a), Self::Component(b)) => a.ptr_eq(b),
            (Self::Registry(a), Self::Registry(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<ComponentRef> for Resolved {
    fn from(component: ComponentRef) -> Self {
        Self::Component(component)
    }
}

impl From<Registry> for Resolved {
    fn from(registry: Registry) -> Self {
        Self::Registry(registry)
    }
}
