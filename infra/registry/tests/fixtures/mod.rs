use aiexec_domain::component::Component;
use aiexec_registry::*;
use fxhash::FxHashMap;
use parking_lot::Mutex;
use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

/// Leaf implementation handed out by the test loaders.
#[derive(Debug, PartialEq, Eq)]
pub struct Handle(pub String);

impl Component for Handle {
    fn kind(&self) -> &'static str {
        "handle"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// What the scripted loader does for one module path.
#[derive(Debug, Clone, Copy)]
pub enum Script {
    Succeed,
    NotFound,
    /// Fail this many times, then succeed.
    FailTimes(usize),
}

/// Loader that counts calls per symbol and follows a per-module script.
/// Unscripted modules are not found.
#[derive(Debug, Default)]
pub struct ScriptedLoader {
    scripts: Mutex<FxHashMap<String, Script>>,
    calls: Mutex<FxHashMap<String, usize>>,
    delay: Option<Duration>,
}

impl ScriptedLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn script(self, module: &str, script: Script) -> Self {
        self.scripts.lock().insert(module.to_owned(), script);
        self
    }

    #[must_use]
    pub const fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self, name: &str) -> usize {
        self.calls.lock().get(name).copied().unwrap_or_default()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().values().sum()
    }
}

impl Loader for ScriptedLoader {
    fn load(&self, name: &SymbolName, location: &Location) -> Result<Resolved, LoadError> {
        *self.calls.lock().entry(name.to_string()).or_default() += 1;
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }

        let mut scripts = self.scripts.lock();
        match scripts.get_mut(location.module_path()) {
            Some(Script::Succeed) => Ok(Resolved::component(Handle(location.to_string()))),
            Some(Script::FailTimes(0)) => {
                Ok(Resolved::component(Handle(location.to_string())))
            }
            Some(Script::FailTimes(remaining)) => {
                *remaining -= 1;
                Err(LoadError::failure(format!("transient failure loading {location}")))
            }
            Some(Script::NotFound) | None => {
                Err(LoadError::not_found(format!("No module named '{}'", location.module_path())))
            }
        }
    }
}

/// `alpha` loads, `beta` always fails.
pub fn alpha_beta() -> (Registry, Arc<ScriptedLoader>) {
    let loader = Arc::new(
        ScriptedLoader::new()
            .script("pkg.alpha", Script::Succeed)
            .script("pkg.beta", Script::FailTimes(usize::MAX)),
    );
    let registry = Registry::builder("pkg")
        .declare(["alpha", "beta"])
        .locate("alpha", Location::module("pkg.alpha"))
        .locate("beta", Location::module("pkg.beta"))
        .shared_loader(Arc::clone(&loader) as Arc<dyn Loader>)
        .build()
        .expect("alpha/beta registry is consistent");
    (registry, loader)
}

/// Two-level catalog: `cat` is a nested registry exporting `Leaf` and `Gone`.
pub fn nested_catalog() -> Registry {
    let table = ModuleTable::builder()
        .module("pkg.cat", |table: &ModuleTable| {
            let nested = Registry::builder("pkg.cat")
                .declare(["Leaf", "Gone"])
                .export("Leaf", "leaf")
                .export("Gone", "gone")
                .loader(ModuleLoader::new(table.clone()))
                .build()?;
            Ok(Module::itself(nested))
        })
        .module("pkg.cat.leaf", |_: &ModuleTable| {
            Ok(Module::new().export("Leaf", Resolved::component(Handle("leaf".to_owned()))))
        })
        .build();

    Registry::builder("pkg")
        .declare(["cat"])
        .submodule("cat")
        .loader(ModuleLoader::new(table))
        .build()
        .expect("catalog is consistent")
}
