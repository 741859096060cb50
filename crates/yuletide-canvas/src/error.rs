//! Surface acquisition errors.

use std::fmt;

/// Error raised when a drawing surface cannot be acquired from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The host has no 2D drawing support.
    Unavailable(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::Unavailable(reason) => {
                write!(f, "Drawing surface unavailable: {}", reason)
            }
        }
    }
}

impl std::error::Error for SurfaceError {}
