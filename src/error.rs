use thiserror::Error;

/// Errors raised by the factorial computers.
///
/// Cache lookups never fail; a missing key is an ordinary miss.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("factorial is undefined for negative input {0}")]
    InvalidArgument(i64),

    #[error("{n}! does not fit in {ty}")]
    Overflow { n: i64, ty: &'static str },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
