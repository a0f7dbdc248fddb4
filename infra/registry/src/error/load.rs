use super::RegistryError;
use std::borrow::Cow;

/// Failure of a single acquisition attempt.
///
/// Every loader collapses its failure modes into these two kinds.
#[aiexec_derive::aiexec_error]
pub enum LoadError {
    /// The module (or package) does not exist.
    #[error("Module not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Acquisition started but did not produce an implementation.
    #[error("Load failure{}: {message}", format_context(.context))]
    LoadFailure { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl LoadError {
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound { message: message.into(), context: None }
    }

    pub fn failure(message: impl Into<Cow<'static, str>>) -> Self {
        Self::LoadFailure { message: message.into(), context: None }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// A nested registry that fails validation is a malformed module from the
/// parent's point of view.
impl From<RegistryError> for LoadError {
    fn from(err: RegistryError) -> Self {
        Self::failure(err.to_string())
    }
}
