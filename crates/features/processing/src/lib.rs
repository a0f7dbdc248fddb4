//! Processing component category: prompt, parsing, data and text utilities.
//!
//! The category is a module of the component package that is itself a
//! [`Registry`] over its leaf components. Each leaf lives in its own
//! sub-module and is only built when first resolved.

mod catalog;

pub use catalog::{DECLARED, ENTRIES, Entry};

use aiexec_kernel::component::{ComponentTemplate, ComponentTemplateInner};
use aiexec_registry::{Module, ModuleLoader, ModuleTable, ModuleTableBuilder, Registry, RegistryError};
use std::sync::Arc;
use tracing::debug;

/// Name of the category under the component package.
pub const CATEGORY: &str = "processing";

/// Builds the category registry for the package at `category_path`
/// (`aiexec.components.processing`), importing leaves from `table`.
///
/// # Errors
/// [`RegistryError::Construction`] if [`DECLARED`] and [`ENTRIES`] disagree.
pub fn registry(category_path: &str, table: &ModuleTable) -> Result<Registry, RegistryError> {
    ENTRIES
        .iter()
        .fold(Registry::builder(category_path).declare(DECLARED), |builder, entry| {
            builder.export(entry.name, entry.module)
        })
        .loader(ModuleLoader::new(table.clone()))
        .build()
}

/// Registers the category module and every leaf module under `package`.
pub fn install(builder: ModuleTableBuilder, package: &str) -> ModuleTableBuilder {
    let category_path: Arc<str> = format!("{package}.{CATEGORY}").into();

    let builder = ENTRIES.iter().fold(builder, |builder, entry| {
        let module_path = format!("{category_path}.{}", entry.module);
        let entry = *entry;
        let module = module_path.clone();
        builder.module(module_path, move |_: &ModuleTable| Ok(leaf_module(entry, &module)))
    });

    debug!(category = %category_path, components = ENTRIES.len(), "Processing category installed");

    let path = Arc::clone(&category_path);
    builder.module(category_path, move |table: &ModuleTable| {
        Ok(Module::itself(registry(&path, table)?))
    })
}

fn leaf_module(entry: Entry, module: &str) -> Module {
    let template = ComponentTemplate::into_ref(ComponentTemplateInner {
        name: entry.name,
        display_name: entry.display_name,
        description: entry.description,
        category: CATEGORY,
        module: module.to_owned(),
    });
    Module::new().export(entry.name, template)
}
