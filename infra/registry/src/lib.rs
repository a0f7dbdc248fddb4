//! # Aiexec Registry
//!
//! Lazy symbol resolution for large component catalogs.
//!
//! A [`Registry`] publishes a fixed set of names. Each name maps to a
//! [`Location`](aiexec_domain::symbol::Location); the implementation behind it
//! is acquired by a [`Loader`] the first time someone asks for it and cached
//! for every later caller.
//!
//! ## Guarantees
//! * **Consistency at startup**: construction fails with every mismatched
//!   name if the declared names and the location map disagree.
//! * **At most one load in flight** per name; concurrent first accesses
//!   share its result.
//! * **Failures are not cached**: a failed load leaves the name unresolved
//!   and the next access retries.
//! * **Nesting**: a symbol may resolve to another registry, so dotted paths
//!   like `processing.PromptComponent` walk category then leaf.
//!
//! ## Example
//! ```rust
//! use aiexec_registry::{LoadError, Registry, Resolved, loader_fn};
//!
//! let registry = Registry::builder("pkg")
//!     .declare(["Nested"])
//!     .submodule("Nested")
//!     .loader(loader_fn(|_, location| {
//!         Registry::builder(location.module_path())
//!             .loader(loader_fn(|_, _| Err(LoadError::not_found("empty"))))
//!             .build()
//!             .map(Resolved::Registry)
//!             .map_err(LoadError::from)
//!     }))
//!     .build()?;
//!
//! assert_eq!(registry.list_symbols(), ["Nested"]);
//! let nested = registry.get_symbol("Nested")?;
//! assert_eq!(nested.as_registry().map(Registry::namespace), Some("pkg.Nested"));
//! # Ok::<(), aiexec_registry::RegistryError>(())
//! ```

mod access;
mod builder;
mod cache;
mod declared;
pub mod error;
mod loader;
mod location;
mod module;
mod prewarm;
mod registry;
mod validator;

pub use builder::{NoLoader, RegistryBuilder, WithLoader, build_registry};
pub use cache::SymbolState;
pub use declared::DeclaredSymbols;
pub use error::{LoadError, LoadErrorExt, Mismatch, RegistryError, RegistryErrorExt};
pub use loader::{Loader, Resolved, loader_fn};
pub use location::LocationMap;
pub use module::{Module, ModuleFactory, ModuleLoader, ModuleTable, ModuleTableBuilder};
pub use prewarm::PrewarmReport;
pub use registry::{Registry, RegistryStats};
pub use validator::validate;

pub use aiexec_domain::config::PrewarmPolicy;
pub use aiexec_domain::symbol::{Location, SymbolName};
