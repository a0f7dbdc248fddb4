//! Kernel utilities shared across category slices.
//! Keep this crate lightweight; it re-exports the domain and provides config loading
//! plus the metadata handle most leaf components are made of.
//!
//! ## Config loading
//! ```rust,ignore
//! use aiexec_kernel::config::load_config;
//! use aiexec_kernel::domain::config::AiexecConfig;
//!
//! let cfg: AiexecConfig = load_config(Some("aiexec")).unwrap_or_default();
//! ```

// Lets `#[aiexec_derive::component]` expand inside this crate too.
extern crate self as aiexec_kernel;

pub mod component;
pub mod config;

pub use aiexec_domain as domain;
