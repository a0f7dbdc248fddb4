use aiexec_derive::aiexec_error;

#[aiexec_error]
pub enum BadContextError {
    Io { source: std::io::Error, context: Option<String> },
}

fn main() {}
