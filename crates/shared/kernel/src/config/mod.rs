use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides (`AIEXEC__CATALOG__NAMESPACE` maps to `catalog.namespace`).
pub const ENV_PREFIX: &str = "AIEXEC";
/// Config file looked up when no path is given (any extension the `config` crate knows).
pub const DEFAULT_CONFIG_FILE: &str = "aiexec";

/// Custom error type for config loading.
#[aiexec_derive::aiexec_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// Layers, lowest priority first:
/// 1. **Base File**: settings from `path` (defaults to `aiexec` in the working directory).
/// 2. **Environment Overrides**: variables prefixed with `AIEXEC__`; nested keys are
///    separated by double underscores. List values are split on commas, so
///    `AIEXEC__CATALOG__PREWARM=processing,logic` yields two entries.
///
/// # Errors
/// This function will return an error if:
/// * The specified (or default) configuration file cannot be found.
/// * The merged content does not match the structure of type `T`.
///
/// # Example
/// ```rust,no_run
/// use aiexec_kernel::config::load_config;
/// use aiexec_kernel::domain::config::AiexecConfig;
///
/// let cfg: AiexecConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("catalog.prewarm")
                .try_parsing(true),
        );

    info!(path = %effective_path.display(), "Loading config");

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
