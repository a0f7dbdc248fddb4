//! Type-erased component handles.
//! A registry hands these out without knowing the concrete component type.

use std::any::Any;
use std::fmt::Debug;
use std::ops::Deref;
use std::sync::Arc;

/// Marker trait for loaded component implementations shared across threads.
pub trait Component: Any + Debug + Send + Sync {
    /// Short, stable name of the component kind (usually the type name).
    fn kind(&self) -> &'static str;

    /// Helper to allow downcasting from the trait object.
    fn as_any(&self) -> &dyn Any;
}

/// A shared, read-only reference to a loaded component.
#[derive(Debug, Clone)]
pub struct ComponentRef(Arc<dyn Component>);

impl ComponentRef {
    pub fn new<T: Component>(component: T) -> Self {
        Self(Arc::new(component))
    }

    /// Returns the concrete component if it is a `T`.
    #[must_use]
    pub fn downcast_ref<T: Component>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// Whether both references point at the same loaded instance.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for ComponentRef {
    type Target = dyn Component;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
