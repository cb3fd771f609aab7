use core::fmt;
use derive_more::From;

/// The only failure this program can hit: the output path cannot be
/// created or written. Nothing is handled locally; every error propagates
/// to `main` and aborts the run.
#[derive(Debug, From)]
pub enum Error {
    #[from]
    Io(std::io::Error),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
