//! Unicode utilities for grapheme-safe selection handling.

mod grapheme;

pub use grapheme::{grapheme_boundaries, is_grapheme_boundary, snap_to_graphemes};
