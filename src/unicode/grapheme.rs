//! Grapheme cluster boundaries and snapping.
//!
//! Offsets handed to and returned from this module are character offsets
//! (Unicode scalar values), the unit the rope-backed snapshots index by.

use unicode_segmentation::UnicodeSegmentation;

/// Character offsets of every grapheme boundary, including `0` and the end.
#[must_use]
pub fn grapheme_boundaries(s: &str) -> Vec<usize> {
    let mut boundaries = vec![0];
    let mut offset = 0;
    for grapheme in s.graphemes(true) {
        offset += grapheme.chars().count();
        boundaries.push(offset);
    }
    boundaries
}

/// Check whether a character offset falls on a grapheme boundary.
#[must_use]
pub fn is_grapheme_boundary(s: &str, char_offset: usize) -> bool {
    grapheme_boundaries(s).binary_search(&char_offset).is_ok()
}

/// Widen `start..end` so neither end splits a grapheme cluster.
///
/// `start` moves back to the start of the cluster containing it and `end`
/// moves forward to the end of the cluster containing it. Offsets already on
/// a boundary are returned unchanged, so ASCII text is never affected. A caret
/// (`start == end`) inside a cluster moves back to the cluster start and stays
/// a caret. Expects `start <= end <= s.chars().count()`.
#[must_use]
pub fn snap_to_graphemes(s: &str, start: usize, end: usize) -> (usize, usize) {
    let mut lo = start;
    let mut hi = end;
    let mut offset = 0;

    for grapheme in s.graphemes(true) {
        let next = offset + grapheme.chars().count();
        if offset < start && start < next {
            lo = offset;
        }
        if offset < end && end < next {
            hi = next;
        }
        if next >= end {
            break;
        }
        offset = next;
    }

    if start == end {
        (lo, lo)
    } else {
        (lo, hi.max(lo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grapheme_boundaries_ascii() {
        assert_eq!(grapheme_boundaries("hello"), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_grapheme_boundaries_emoji() {
        // Family emoji (ZWJ sequence) is one cluster
        let family = "👨‍👩‍👧";
        assert_eq!(grapheme_boundaries(family), vec![0, family.chars().count()]);
    }

    #[test]
    fn test_grapheme_boundaries_combining() {
        // e + combining acute accent is two chars, one cluster
        assert_eq!(grapheme_boundaries("ae\u{0301}b"), vec![0, 1, 3, 4]);
        assert!(is_grapheme_boundary("ae\u{0301}b", 3));
        assert!(!is_grapheme_boundary("ae\u{0301}b", 2));
    }

    #[test]
    fn test_grapheme_boundaries_empty() {
        assert_eq!(grapheme_boundaries(""), vec![0]);
    }

    #[test]
    fn test_snap_ascii_is_identity() {
        assert_eq!(snap_to_graphemes("hello world", 6, 11), (6, 11));
        assert_eq!(snap_to_graphemes("hello", 2, 2), (2, 2));
    }

    #[test]
    fn test_snap_widens_split_cluster() {
        let text = "ae\u{0301}b";
        // Selecting only the combining accent pulls in its base char
        assert_eq!(snap_to_graphemes(text, 2, 3), (1, 3));
        // Ending between base and accent pushes the end past the accent
        assert_eq!(snap_to_graphemes(text, 0, 2), (0, 3));
    }

    #[test]
    fn test_snap_zwj_sequence() {
        let text = "x👨‍👩‍👧y";
        let family_chars = "👨‍👩‍👧".chars().count();
        assert_eq!(snap_to_graphemes(text, 2, 3), (1, 1 + family_chars));
    }

    #[test]
    fn test_snap_caret_stays_caret() {
        // \r\n is one cluster; a caret between the two moves before the \r
        assert_eq!(snap_to_graphemes("a\r\nb", 2, 2), (1, 1));
        assert_eq!(snap_to_graphemes("a\r\nb", 1, 2), (1, 3));
    }
}
