use aiexec_derive::aiexec_error;
use std::borrow::Cow;

#[aiexec_error]
pub enum LookupError {
    #[error("Missing '{name}'{}", format_context(.context))]
    Missing { name: String, context: Option<Cow<'static, str>> },

    // Shares its source type with `Io`; only the unidentified variant converts.
    #[error("Could not open '{name}'{}: {source}", format_context(.context))]
    Open { name: String, source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: LookupError = std::io::Error::other("gone").into();
    assert!(matches!(err, LookupError::Io { .. }));

    let missing: Result<(), LookupError> =
        Err(LookupError::Missing { name: "alpha".to_owned(), context: None });
    let missing = missing.context("while warming").unwrap_err();
    assert_eq!(missing.to_string(), "Missing 'alpha' (while warming)");
}
