//! Crate error type.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required argument was missing.
    #[error("{name} is required.")]
    InvalidArgument { name: &'static str },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
