use crate::catalog::{Catalog, CategoryListing};
use crate::categories::{CATEGORIES, MAPPED};
use crate::error::{AiexecError, AiexecErrorExt};
use aiexec_domain::config::{AiexecConfig, PrewarmPolicy};
use aiexec_kernel::config::load_config;
use aiexec_registry::{
    LoadError, Location, Module, ModuleLoader, ModuleTable, ModuleTableBuilder, PrewarmReport,
    Registry, RegistryError, Resolved,
};
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

type Installer = Box<dyn FnOnce(ModuleTableBuilder, &str) -> ModuleTableBuilder + Send>;

#[derive(Debug)]
struct ComponentsInner {
    registry: Registry,
    table: ModuleTable,
}

/// The component catalog of a process.
///
/// Wraps the top-level registry of categories and the module table every
/// category and leaf is imported from. Cheap to clone; construct once at
/// startup and hand clones to collaborators.
#[derive(Debug, Clone)]
pub struct Components {
    inner: Arc<ComponentsInner>,
}

impl Components {
    /// Builder with the default namespace and every built-in category installed.
    pub fn builder() -> ComponentsBuilder {
        ComponentsBuilder::default()
    }

    /// Builds the catalog for `config` and runs its configured prewarm.
    ///
    /// # Errors
    /// * [`AiexecError::Registry`] if the category registry is inconsistent, or
    ///   if a prewarm path fails under [`PrewarmPolicy::FailFast`].
    pub fn from_config(config: &AiexecConfig) -> Result<Self, AiexecError> {
        let catalog = &config.catalog;
        let components = Self::builder()
            .namespace(catalog.namespace.as_str())
            .build()
            .context("Failed to build component catalog")?;

        if !catalog.prewarm.is_empty() {
            components
                .prewarm(&catalog.prewarm, catalog.prewarm_policy)
                .context("Failed to prewarm component catalog")?;
        }

        Ok(components)
    }

    /// Loads the config file at `path` (with `AIEXEC__` overrides) and builds the catalog.
    ///
    /// # Errors
    /// [`AiexecError::Config`] if the config cannot be loaded, otherwise as
    /// [`Components::from_config`].
    pub fn load(path: Option<impl AsRef<Path>>) -> Result<Self, AiexecError> {
        let config: AiexecConfig = load_config(path)?;
        Self::from_config(&config)
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    #[must_use]
    pub fn table(&self) -> &ModuleTable {
        &self.inner.table
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        self.inner.registry.namespace()
    }

    /// Resolves a category (`processing`) or a component (`processing.PromptComponent`).
    ///
    /// # Errors
    /// See [`Registry::resolve_path`].
    pub fn get(&self, path: &str) -> Result<Resolved, RegistryError> {
        self.inner.registry.resolve_path(path)
    }

    /// Async form of [`Components::get`].
    ///
    /// # Errors
    /// See [`Registry::resolve_path`].
    pub async fn get_async(&self, path: &str) -> Result<Resolved, RegistryError> {
        self.inner.registry.resolve_path_async(path).await
    }

    /// Resolves `paths` eagerly. Each failure is logged.
    ///
    /// # Errors
    /// The first failure under [`PrewarmPolicy::FailFast`].
    pub fn prewarm<I, S>(&self, paths: I, policy: PrewarmPolicy) -> Result<PrewarmReport, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let report = self.inner.registry.prewarm(paths, policy).inspect_err(|err| {
            warn!(namespace = self.namespace(), error = %err, "Prewarm aborted");
        })?;

        for (path, err) in &report.failed {
            warn!(
                namespace = self.namespace(),
                path = path.as_str(),
                error = %err,
                "Component failed to prewarm"
            );
        }

        Ok(report)
    }

    /// Lists every category with its components.
    ///
    /// Resolves each category registry, which loads no leaf component.
    /// Categories that fail to load are reported in [`Catalog::unavailable`].
    #[must_use]
    pub fn catalog(&self) -> Catalog {
        let mut catalog = Catalog::default();

        for category in self.inner.registry.list_symbols() {
            match self.inner.registry.get_symbol(category) {
                Ok(Resolved::Registry(registry)) => catalog.categories.push(CategoryListing {
                    category: category.clone(),
                    components: registry.list_symbols().to_vec(),
                }),
                Ok(Resolved::Component(_)) => catalog
                    .categories
                    .push(CategoryListing { category: category.clone(), components: Vec::new() }),
                Err(err) => catalog.unavailable.push((category.clone(), err)),
            }
        }

        catalog
    }
}

/// Collects category installers; nothing is validated until [`ComponentsBuilder::build`].
#[must_use = "builders do nothing unless you call .build()"]
pub struct ComponentsBuilder {
    namespace: Arc<str>,
    installers: Vec<Installer>,
}

impl Default for ComponentsBuilder {
    fn default() -> Self {
        builtin(Self::empty())
    }
}

#[cfg(feature = "processing")]
fn builtin(builder: ComponentsBuilder) -> ComponentsBuilder {
    builder.install_with(aiexec_processing::install)
}

#[cfg(not(feature = "processing"))]
fn builtin(builder: ComponentsBuilder) -> ComponentsBuilder {
    builder
}

impl ComponentsBuilder {
    /// A builder without the built-in categories.
    pub fn empty() -> Self {
        Self { namespace: AiexecConfig::default().catalog.namespace.as_str().into(), installers: Vec::new() }
    }

    /// Root package path of the top-level registry. Installers see the final value.
    pub fn namespace(mut self, namespace: impl Into<Arc<str>>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Installs the module of `category` under the package.
    pub fn install<F>(self, category: &str, factory: F) -> Self
    where
        F: Fn(&ModuleTable) -> Result<Module, LoadError> + Send + Sync + 'static,
    {
        let category = category.to_owned();
        self.install_with(move |builder, package| builder.module(format!("{package}.{category}"), factory))
    }

    /// Registers a module at an absolute path, e.g. a leaf of an installed category.
    pub fn module<F>(self, path: &str, factory: F) -> Self
    where
        F: Fn(&ModuleTable) -> Result<Module, LoadError> + Send + Sync + 'static,
    {
        let path = path.to_owned();
        self.install_with(move |builder, _| builder.module(path, factory))
    }

    /// Runs `installer` with the module table builder and the package path.
    pub fn install_with<F>(mut self, installer: F) -> Self
    where
        F: FnOnce(ModuleTableBuilder, &str) -> ModuleTableBuilder + Send + 'static,
    {
        self.installers.push(Box::new(installer));
        self
    }

    /// Installs every module and builds the top-level registry.
    ///
    /// # Errors
    /// [`RegistryError::Construction`] if the category lists disagree.
    pub fn build(self) -> Result<Components, RegistryError> {
        let namespace = self.namespace;
        let table = self
            .installers
            .into_iter()
            .fold(ModuleTable::builder(), |builder, install| install(builder, &namespace))
            .build();

        let registry = Registry::builder(Arc::clone(&namespace))
            .declare(CATEGORIES)
            .locations(MAPPED.iter().map(|category| (*category, Location::relative(&namespace, category))))
            .loader(ModuleLoader::new(table.clone()))
            .build()?;

        info!(namespace = %namespace, modules = table.len(), "Component catalog ready");
        Ok(Components { inner: Arc::new(ComponentsInner { registry, table }) })
    }
}

impl fmt::Debug for ComponentsBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentsBuilder")
            .field("namespace", &self.namespace)
            .field("installers", &self.installers.len())
            .finish()
    }
}
