//! Error kinds of registry construction, lookup and loading.

mod load;
mod mismatch;
mod registry;

pub use load::{LoadError, LoadErrorExt};
pub use mismatch::Mismatch;
pub use registry::{RegistryError, RegistryErrorExt};
