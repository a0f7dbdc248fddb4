//! Resolution from async contexts.
//!
//! Loaders are synchronous and may block, so cache misses run on the blocking
//! pool. Cache hits and lookups that fail before any load return without
//! leaving the calling task.

use crate::error::{LoadError, RegistryError};
use crate::loader::Resolved;
use crate::registry::Registry;
use aiexec_domain::symbol::PATH_SEPARATOR;

impl Registry {
    /// Async form of [`Registry::get_symbol`].
    ///
    /// # Errors
    /// Same as [`Registry::get_symbol`]. A resolution task that panics or is
    /// cancelled surfaces as [`RegistryError::UnresolvableSymbol`].
    pub async fn get_symbol_async(&self, name: &str) -> Result<Resolved, RegistryError> {
        let Some((_, slot)) = self.inner.cache.slot(name) else {
            return Err(self.unknown(name));
        };
        if let Some(resolved) = slot.get() {
            return Ok(resolved.clone());
        }

        let registry = self.clone();
        let owned = name.to_owned();
        tokio::task::spawn_blocking(move || registry.get_symbol(&owned))
            .await
            .unwrap_or_else(|err| Err(self.unresolvable(name, LoadError::failure(err.to_string()))))
    }

    /// Async form of [`Registry::resolve_path`].
    ///
    /// # Errors
    /// Same as [`Registry::resolve_path`].
    pub async fn resolve_path_async(&self, path: &str) -> Result<Resolved, RegistryError> {
        if let Some(resolved) = self.cached(path) {
            return Ok(resolved);
        }
        let first = path.split(PATH_SEPARATOR).next().unwrap_or(path);
        if !self.contains(first) || path.split(PATH_SEPARATOR).any(str::is_empty) {
            // Fails before reaching a loader.
            return self.resolve_path(path);
        }

        let registry = self.clone();
        let owned = path.to_owned();
        tokio::task::spawn_blocking(move || registry.resolve_path(&owned))
            .await
            .unwrap_or_else(|err| Err(self.unresolvable(path, LoadError::failure(err.to_string()))))
    }
}
