#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the workspace: error enums wired for context
//! propagation, and `Arc`-backed component handles that can be stored in a
//! registry.
//!
//! See each macro's docstring for examples; they are `ignore`d to avoid compiling in this crate.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// A high-level attribute macro for defining domain-specific error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` carrying this error type.
/// * **Source Conversions**: Implements `From<T>` (and `.context()` on `Result<_, T>`)
///   for variants whose only fields are `source: T` and `context`.
///   Variants that also identify *what* failed (for example a symbol name) get no
///   conversion, so the identifying field can never be silently left out.
/// * **Internal Fallback**: `From<&str>` and `From<String>` when an `Internal`
///   variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. A `context` field must be typed `Option<Cow<'static, str>>`.
/// 3. Variants wrapping an upstream error must carry a `context` field.
/// 4. At most one convertible variant per source type.
///
/// # Example
///
/// ```rust,ignore
/// use aiexec_derive::aiexec_error;
/// use std::borrow::Cow;
///
/// #[aiexec_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Missing key '{key}'{}", format_context(.context))]
///     Missing { key: String, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn aiexec_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro to define a component handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` is generated as a cheap
/// `Arc` wrapper that derefs to the inner state and implements
/// `aiexec_kernel::domain::component::Component`, so it can be returned from a
/// module loader and handed out by a registry.
///
/// An optional `kind = "..."` argument overrides the reported component kind
/// (defaults to the struct name).
///
/// # Example
/// ```rust,ignore
/// #[aiexec_derive::component(kind = "prompt")]
/// pub struct Prompt {
///     pub template: String,
/// }
///
/// let handle = Prompt::new(PromptInner { template: "{input}".to_owned() });
/// assert_eq!(handle.template, "{input}");
/// ```
#[proc_macro_attribute]
pub fn component(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::component::expand_component(args.into(), input).into()
}
