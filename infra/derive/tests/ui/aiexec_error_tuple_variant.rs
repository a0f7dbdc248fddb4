use aiexec_derive::aiexec_error;

#[aiexec_error]
pub enum TupleError {
    Io(std::io::Error),
}

fn main() {}
