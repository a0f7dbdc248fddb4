//! Metadata handle shared by leaf components.

use crate::domain::component::ComponentRef;

/// Descriptive template of a leaf component, as shown by catalog tooling.
#[aiexec_derive::component(kind = "template")]
#[derive(PartialEq, Eq)]
pub struct ComponentTemplate {
    /// Public symbol name (`PromptComponent`).
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    /// Category the component is listed under (`processing`).
    pub category: &'static str,
    /// Module path the template was loaded from.
    pub module: String,
}

impl ComponentTemplate {
    /// Builds the template and erases it into a [`ComponentRef`].
    #[must_use]
    pub fn into_ref(inner: ComponentTemplateInner) -> ComponentRef {
        Self::new(inner).into()
    }
}
