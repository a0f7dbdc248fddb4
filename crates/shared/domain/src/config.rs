use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level configuration shared across the component system.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AiexecConfigInner {
    pub catalog: CatalogConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AiexecConfig {
    #[serde(flatten, default)]
    inner: Arc<AiexecConfigInner>,
}

impl Deref for AiexecConfig {
    type Target = AiexecConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AiexecConfig {
    fn deref_mut(&mut self) -> &mut AiexecConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// What a bulk pre-warm does when one name fails to resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrewarmPolicy {
    /// Record the failure and keep going.
    #[default]
    Continue,
    /// Stop at the first failure and return it.
    FailFast,
}

/// Component catalog configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Dotted package path of the top-level registry.
    pub namespace: String,
    /// Dotted symbol paths resolved eagerly at startup (e.g. `processing.PromptComponent`).
    pub prewarm: Vec<String>,
    pub prewarm_policy: PrewarmPolicy,
}

// --- Default ---

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            namespace: "aiexec.components".to_owned(),
            prewarm: Vec::new(),
            prewarm_policy: PrewarmPolicy::Continue,
        }
    }
}
