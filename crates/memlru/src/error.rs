//! Error types for memlru

use std::fmt;

/// Result type alias for memlru operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache construction
///
/// Lookup misses are not errors; they surface as `None` from [`get`].
/// The only failure this crate knows is a contract violation at the
/// construction boundary.
///
/// [`get`]: crate::LruCache::get
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// Cache constructed with a capacity that cannot hold any entry
    InvalidCapacity(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCapacity(capacity) => {
                write!(f, "Invalid capacity: {} (must be at least 1)", capacity)
            }
        }
    }
}

impl std::error::Error for Error {}
