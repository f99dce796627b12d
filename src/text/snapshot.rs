//! Immutable rope-backed document snapshots.

use std::fmt;
use std::ops::Range;

use ropey::Rope;

use crate::unicode::snap_to_graphemes;

/// One full copy of the document text at a point in history.
///
/// Backed by a [`ropey::Rope`]: cloning shares the tree, and the `with_*`
/// methods edit a clone, so a snapshot is never mutated after creation and
/// consecutive history entries share most of their storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    rope: Rope,
}

impl Snapshot {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a snapshot from a string.
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Get the number of bytes.
    #[must_use]
    pub fn len_bytes(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Get the number of characters.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len_bytes() == 0
    }

    /// Check whether the snapshot holds exactly `text`.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.rope == text
    }

    /// Character offset of the start of the line containing `char_idx`.
    ///
    /// A line starts right after the nearest preceding `'\n'`, or at 0. Only
    /// `'\n'` counts here, unlike ropey's line indexing which also breaks on
    /// `'\r'` and the Unicode line separators.
    #[must_use]
    pub fn line_start(&self, char_idx: usize) -> usize {
        let mut idx = char_idx.min(self.len_chars());
        let mut chars = self.rope.chars_at(idx);
        while let Some(ch) = chars.prev() {
            if ch == '\n' {
                break;
            }
            idx -= 1;
        }
        idx
    }

    /// Character offset just past the first `'\n'` at or after `char_idx`,
    /// or the end of the document.
    fn line_end_inclusive(&self, char_idx: usize) -> usize {
        let mut idx = char_idx.min(self.len_chars());
        for ch in self.rope.chars_at(idx) {
            idx += 1;
            if ch == '\n' {
                break;
            }
        }
        idx
    }

    /// Widen a character range so it does not split a grapheme cluster.
    ///
    /// Only the lines touched by the range are scanned.
    #[must_use]
    pub fn snap_to_graphemes(&self, range: Range<usize>) -> Range<usize> {
        let len = self.len_chars();
        let end = range.end.min(len);
        let start = range.start.min(end);
        let region_start = self.line_start(start);
        let region_end = self.line_end_inclusive(end);
        let region = self.rope.slice(region_start..region_end).to_string();
        let (lo, hi) = snap_to_graphemes(&region, start - region_start, end - region_start);
        region_start + lo..region_start + hi
    }

    /// Copy a character range out as a `String`.
    #[must_use]
    pub fn slice_to_string(&self, range: Range<usize>) -> String {
        self.rope
            .get_slice(range)
            .map(|slice| slice.to_string())
            .unwrap_or_default()
    }

    /// A new snapshot with `text` inserted at `char_idx` (clamped to the end).
    #[must_use]
    pub fn with_inserted(&self, char_idx: usize, text: &str) -> Self {
        let mut rope = self.rope.clone();
        rope.insert(char_idx.min(rope.len_chars()), text);
        Self { rope }
    }

    /// A new snapshot with a character range replaced by `text`.
    #[must_use]
    pub fn with_replaced(&self, range: Range<usize>, text: &str) -> Self {
        let mut rope = self.rope.clone();
        let end = range.end.min(rope.len_chars());
        let start = range.start.min(end);
        rope.remove(start..end);
        rope.insert(start, text);
        Self { rope }
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

impl From<&str> for Snapshot {
    fn from(s: &str) -> Self {
        Self::from_str(s)
    }
}

impl From<String> for Snapshot {
    fn from(s: String) -> Self {
        Self::from_str(&s)
    }
}

impl From<Rope> for Snapshot {
    fn from(rope: Rope) -> Self {
        Self { rope }
    }
}
