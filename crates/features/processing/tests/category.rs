use aiexec_kernel::component::ComponentTemplate;
use aiexec_processing::{CATEGORY, DECLARED, ENTRIES, install};
use aiexec_registry::{Location, Module, ModuleLoader, ModuleTable, Registry, SymbolState};

const PACKAGE: &str = "aiexec.components";

fn category() -> Registry {
    let table = ModuleTable::builder().install(|builder| install(builder, PACKAGE)).build();
    let package = Registry::builder(PACKAGE)
        .declare([CATEGORY])
        .submodule(CATEGORY)
        .loader(ModuleLoader::new(table))
        .build()
        .expect("package registry is consistent");

    package
        .get_symbol(CATEGORY)
        .expect("category loads")
        .as_registry()
        .cloned()
        .expect("category is a registry")
}

#[test]
fn category_lists_every_component_without_loading() {
    let registry = category();

    assert_eq!(registry.namespace(), "aiexec.components.processing");
    assert_eq!(registry.list_symbols(), DECLARED);
    assert_eq!(registry.stats().resolved, 0);
}

#[test]
fn every_declared_component_resolves_to_its_template() {
    let registry = category();

    for entry in &ENTRIES {
        let resolved = registry.get_symbol(entry.name).expect("component loads");
        let template = resolved.downcast_ref::<ComponentTemplate>().expect("template");
        assert_eq!(template.name, entry.name);
        assert_eq!(template.category, CATEGORY);
        assert_eq!(template.module, format!("aiexec.components.processing.{}", entry.module));
    }

    assert_eq!(registry.stats().resolved, DECLARED.len());
}

#[test]
fn leaf_location_differs_from_symbol_name() {
    let registry = category();

    assert_eq!(
        registry.location_of("TypeConverterComponent"),
        Some(&Location::attribute("aiexec.components.processing.converter", "TypeConverterComponent"))
    );
    assert_eq!(registry.state("PromptComponent"), Some(SymbolState::Unresolved));

    let prompt = registry.get_symbol("PromptComponent").unwrap();
    let template = prompt.downcast_ref::<ComponentTemplate>().unwrap();
    assert_eq!(template.display_name, "Prompt Template");
    assert_eq!(registry.state("PromptComponent"), Some(SymbolState::Resolved));
}

#[test]
fn replaced_leaf_module_without_export_fails_only_that_component() {
    let table = ModuleTable::builder()
        .install(|builder| install(builder, PACKAGE))
        .module("aiexec.components.processing.regex", |_: &ModuleTable| Ok(Module::new()))
        .build();
    let registry =
        aiexec_processing::registry("aiexec.components.processing", &table).expect("consistent");

    let err = registry.get_symbol("RegexExtractorComponent").unwrap_err();
    assert!(err.is_unresolvable());
    assert!(err.to_string().contains("no attribute 'RegexExtractorComponent'"));
    assert!(registry.get_symbol("SplitTextComponent").is_ok());
}
