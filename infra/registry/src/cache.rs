//! Per-symbol resolution slots.
//!
//! The slot set is fixed when the registry is built, so the map itself is
//! never written after construction and needs no lock. Each slot publishes
//! its value once through a [`OnceLock`]; a per-slot gate serializes loads so
//! at most one acquisition per symbol is in flight. A failed load publishes
//! nothing and releases the gate, so the next caller retries.
//!
//! The gate is reentrant. A loader that asks for its own symbol again on the
//! same thread gets a circular import failure instead of a deadlock.

use crate::error::LoadError;
use crate::loader::Resolved;
use aiexec_domain::symbol::SymbolName;
use fxhash::FxHashMap;
use parking_lot::ReentrantMutex;
use std::cell::Cell;
use std::sync::OnceLock;

/// Observable resolution state of one declared symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolState {
    Unresolved,
    /// A load is in flight.
    Resolving,
    Resolved,
}

#[derive(Debug, Default)]
pub(crate) struct Slot {
    value: OnceLock<Resolved>,
    /// Holds `true` while the owning thread runs the loader.
    gate: ReentrantMutex<Cell<bool>>,
}

/// Clears the loading flag even if the loader panics.
struct Loading<'a>(&'a Cell<bool>);

impl Drop for Loading<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl Slot {
    pub(crate) fn get(&self) -> Option<&Resolved> {
        self.value.get()
    }

    /// Returns the cached value or runs `load` under the gate.
    ///
    /// Callers that queued behind a successful load get its value without
    /// calling `load` themselves.
    pub(crate) fn get_or_try_init<F>(&self, load: F) -> Result<Resolved, LoadError>
    where
        F: FnOnce() -> Result<Resolved, LoadError>,
    {
        if let Some(resolved) = self.value.get() {
            return Ok(resolved.clone());
        }

        let gate = self.gate.lock();
        if let Some(resolved) = self.value.get() {
            return Ok(resolved.clone());
        }
        if gate.replace(true) {
            return Err(LoadError::failure("circular import"));
        }

        let loading = Loading(&*gate);
        let resolved = load();
        drop(loading);
        let resolved = resolved?;
        Ok(self.value.get_or_init(|| resolved).clone())
    }

    pub(crate) fn state(&self) -> SymbolState {
        if self.value.get().is_some() {
            SymbolState::Resolved
        } else if self.gate.is_locked() {
            SymbolState::Resolving
        } else {
            SymbolState::Unresolved
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct ResolutionCache {
    slots: FxHashMap<SymbolName, Slot>,
}

impl ResolutionCache {
    pub(crate) fn new<'a>(names: impl IntoIterator<Item = &'a SymbolName>) -> Self {
        Self { slots: names.into_iter().map(|name| (name.clone(), Slot::default())).collect() }
    }

    pub(crate) fn slot(&self, name: &str) -> Option<(&SymbolName, &Slot)> {
        self.slots.get_key_value(name)
    }

    pub(crate) fn resolved_count(&self) -> usize {
        self.slots.values().filter(|slot| slot.get().is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::loader_fn;
    use crate::registry::Registry;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Barrier;

    fn nested() -> Resolved {
        Resolved::Registry(
            Registry::builder("pkg")
                .loader(loader_fn(|_, _| Err(LoadError::not_found("unused"))))
                .build()
                .expect("empty registry is consistent"),
        )
    }

    #[test]
    fn failure_is_not_published() {
        let slot = Slot::default();
        assert!(slot.get_or_try_init(|| Err(LoadError::failure("boom"))).is_err());
        assert_eq!(slot.state(), SymbolState::Unresolved);

        let loaded = slot.get_or_try_init(|| Ok(nested())).expect("second attempt loads");
        assert_eq!(slot.state(), SymbolState::Resolved);
        assert!(slot.get().is_some_and(|cached| cached.ptr_eq(&loaded)));
    }

    #[test]
    fn concurrent_misses_load_once() {
        const THREADS: usize = 8;
        let slot = Slot::default();
        let calls = AtomicUsize::new(0);
        let barrier = Barrier::new(THREADS);

        let results: Vec<Resolved> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        slot.get_or_try_init(|| {
                            calls.fetch_add(1, Ordering::SeqCst);
                            std::thread::sleep(std::time::Duration::from_millis(20));
                            Ok(nested())
                        })
                        .expect("load succeeds")
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().expect("thread")).collect()
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(results.iter().all(|r| r.ptr_eq(&results[0])));
    }

    #[test]
    fn reentrant_load_fails_instead_of_blocking() {
        let slot = Slot::default();

        let inner = slot.get_or_try_init(|| {
            let err = slot.get_or_try_init(|| Ok(nested())).unwrap_err();
            assert_eq!(err.to_string(), "Load failure: circular import");
            Err(err)
        });

        assert!(inner.is_err());
        assert_eq!(slot.state(), SymbolState::Unresolved);
        assert!(slot.get_or_try_init(|| Ok(nested())).is_ok(), "flag is cleared after the cycle");
    }

    #[test]
    fn cache_only_has_declared_slots() {
        let names: Vec<SymbolName> = vec!["A".into(), "B".into()];
        let cache = ResolutionCache::new(&names);
        assert!(cache.slot("A").is_some());
        assert!(cache.slot("C").is_none());
        assert_eq!(cache.resolved_count(), 0);
    }
}
