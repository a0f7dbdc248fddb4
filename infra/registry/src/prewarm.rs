//! Bulk eager resolution, typically run once at startup.

use crate::error::RegistryError;
use crate::registry::Registry;
use aiexec_domain::config::PrewarmPolicy;
use tracing::{debug, info};

/// Outcome of [`Registry::prewarm`], in request order.
#[derive(Debug, Default)]
pub struct PrewarmReport {
    pub resolved: Vec<String>,
    pub failed: Vec<(String, RegistryError)>,
}

impl PrewarmReport {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl Registry {
    /// Resolves every path in `paths` now instead of on first use.
    ///
    /// Under [`PrewarmPolicy::Continue`] failures are collected in the report.
    /// Successful resolutions stay cached either way.
    ///
    /// # Errors
    /// Under [`PrewarmPolicy::FailFast`], the first resolution error.
    pub fn prewarm<I, S>(&self, paths: I, policy: PrewarmPolicy) -> Result<PrewarmReport, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut report = PrewarmReport::default();

        for path in paths {
            let path = path.as_ref();
            match self.resolve_path(path) {
                Ok(_) => report.resolved.push(path.to_owned()),
                Err(err) if policy == PrewarmPolicy::Continue => {
                    debug!(namespace = self.namespace(), path, error = %err, "Prewarm skipped symbol");
                    report.failed.push((path.to_owned(), err));
                }
                Err(err) => return Err(err),
            }
        }

        info!(
            namespace = self.namespace(),
            resolved = report.resolved.len(),
            failed = report.failed.len(),
            "Prewarm finished"
        );
        Ok(report)
    }

    /// [`Registry::prewarm`] over every declared name of this registry.
    ///
    /// # Errors
    /// Under [`PrewarmPolicy::FailFast`], the first resolution error.
    pub fn prewarm_all(&self, policy: PrewarmPolicy) -> Result<PrewarmReport, RegistryError> {
        self.prewarm(self.list_symbols(), policy)
    }
}
