//! Error types for markdraft.
//!
//! The history operations themselves never fail. These errors come from the
//! boundary helpers hosts use to turn toolbar ids and raw offsets into typed
//! values.

use std::fmt;

/// Result type alias for markdraft operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for markdraft operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Toolbar command id that does not name a payload-free transform.
    UnknownCommand(String),
    /// Heading level outside `1..=3`.
    InvalidHeadingLevel(u8),
    /// Selection offsets past the end of the document.
    SelectionOutOfBounds { start: usize, end: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand(id) => write!(f, "unknown formatting command: {id:?}"),
            Self::InvalidHeadingLevel(level) => {
                write!(f, "invalid heading level: {level} (expected 1-3)")
            }
            Self::SelectionOutOfBounds { start, end, len } => {
                write!(
                    f,
                    "selection {start}..{end} out of bounds for document of {len} chars"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
