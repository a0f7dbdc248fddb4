use aiexec_derive::aiexec_error;

#[aiexec_error]
pub enum DuplicateSourceError {
    Read { source: std::io::Error, context: Option<std::borrow::Cow<'static, str>> },
    Write { source: std::io::Error, context: Option<std::borrow::Cow<'static, str>> },
}

fn main() {}
