//! Errors returned by fallible [`Tree`][crate::Tree] operations.

use std::fmt;

/// A specialized `Result` for tree operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong in a [`Tree`][crate::Tree] operation. A failed
/// mutation always leaves the tree exactly as it was before the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Error {
    /// A construction parameter can't describe a usable tree.
    InvalidArgument,
    /// Allocating a node or growing the descent path failed.
    OutOfMemory,
    /// No stored element compares equal to the given key.
    NotFound,
    /// The descent path outgrew the capacity the tree was configured with.
    TooLarge,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::InvalidArgument => "invalid argument",
            Self::OutOfMemory => "out of memory",
            Self::NotFound => "no such element",
            Self::TooLarge => "tree is too tall for the configured path capacity",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for Error {}

impl From<std::collections::TryReserveError> for Error {
    fn from(_: std::collections::TryReserveError) -> Self {
        Self::OutOfMemory
    }
}
