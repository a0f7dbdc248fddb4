use aiexec_derive::aiexec_error;

#[aiexec_error]
pub enum NoContextError {
    Io { source: std::io::Error },
}

fn main() {}
