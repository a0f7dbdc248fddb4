use aiexec_kernel::config::ConfigError;
use aiexec_registry::RegistryError;
use std::borrow::Cow;

#[aiexec_derive::aiexec_error]
pub enum AiexecError {
    #[error("Registry error{}: {source}", format_context(.context))]
    Registry { source: RegistryError, context: Option<Cow<'static, str>> },

    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },
}
