//! Facade crate for the aiexec component catalog.
//! Re-exports the domain, kernel and registry crates and composes the built-in categories.
//! Keep this crate thin: it should compose other crates, not implement component logic.
//!
//! ## Usage
//! - Add `aiexec` with the desired category features (`processing` is on by default).
//! - Build a [`Components`] once at startup, from config with [`Components::from_config`]
//!   or directly with [`Components::builder`], and pass clones to collaborators.
//! - Resolve with dotted paths: `components.get("processing.PromptComponent")`.

mod catalog;
mod categories;
mod components;
mod error;

pub use aiexec_domain as domain;
pub use aiexec_kernel as kernel;
pub use aiexec_registry as registry;

pub use catalog::{Catalog, CategoryListing};
pub use categories::{CATEGORIES, MAPPED};
pub use components::{Components, ComponentsBuilder};
pub use error::{AiexecError, AiexecErrorExt};

/// Built-in categories for runtime introspection.
pub mod features {
    #[cfg(feature = "processing")]
    pub use aiexec_processing as processing;

    /// Categories installed at build time (by Cargo feature).
    pub const INSTALLED: &[&str] = &[
        #[cfg(feature = "processing")]
        "processing",
    ];

    #[must_use]
    pub fn is_installed(category: &str) -> bool {
        INSTALLED.contains(&category)
    }
}
