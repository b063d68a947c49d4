//! Errors raised while constructing atoms.
//!
//! The set algebra itself is total; only building a symbolic atom from an
//! index or a label can fail.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("element index must be non-negative, got {0}")]
    NegativeIndex(i64),
    #[error("element index {index} is out of range for a universe of {size} elements")]
    IndexOutOfRange { index: usize, size: usize },
    #[error("element label must not be empty")]
    EmptyLabel,
    #[error("element '{0}' is not part of the universe")]
    UnknownLabel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
