//! Transient selection ranges.

use crate::error::{Error, Result};

/// A character-offset range into the document, used for a single command.
///
/// Always stored normalized (`start <= end`). An empty selection is a caret.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    start: usize,
    end: usize,
}

impl Selection {
    /// Create a selection between two offsets in either order.
    #[must_use]
    pub fn new(anchor: usize, head: usize) -> Self {
        Self {
            start: anchor.min(head),
            end: anchor.max(head),
        }
    }

    /// Create an empty selection (caret) at an offset.
    #[must_use]
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Create a selection, rejecting offsets past `len_chars`.
    pub fn checked(anchor: usize, head: usize, len_chars: usize) -> Result<Self> {
        let selection = Self::new(anchor, head);
        if selection.end > len_chars {
            return Err(Error::SelectionOutOfBounds {
                start: selection.start,
                end: selection.end,
                len: len_chars,
            });
        }
        Ok(selection)
    }

    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of selected characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if position is within selection.
    #[must_use]
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end
    }

    /// Clamp both ends to a document of `len_chars` characters.
    #[must_use]
    pub fn clamp(self, len_chars: usize) -> Self {
        Self {
            start: self.start.min(len_chars),
            end: self.end.min(len_chars),
        }
    }

    /// Shift both ends forward by `delta` characters.
    #[must_use]
    pub fn shifted(self, delta: usize) -> Self {
        Self {
            start: self.start + delta,
            end: self.end + delta,
        }
    }

    /// The selection as a half-open range.
    #[must_use]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl From<std::ops::Range<usize>> for Selection {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}
