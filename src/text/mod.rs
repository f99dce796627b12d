//! Document snapshots, selections, formatting transforms, and undo history.
//!
//! Key types:
//!
//! - [`Snapshot`]: Immutable rope-backed copy of the document text
//! - [`Selection`]: Character-offset range a command applies to
//! - [`TransformKind`]: Closed set of toolbar formatting commands
//! - [`HistoryLog`]: Snapshot tape with a cursor (linear undo, branch-on-write)
//! - [`EditHistory`]: Editor component tying the log to host callbacks
//!
//! # Examples
//!
//! ```
//! use markdraft::EditHistory;
//!
//! let mut editor = EditHistory::new("A");
//! editor.apply_raw_edit("AB");
//! editor.apply_raw_edit("ABC");
//! editor.undo();
//! assert_eq!(editor.text(), "AB");
//!
//! // A new edit after undo discards the redo entry
//! editor.apply_raw_edit("ABX");
//! assert!(!editor.can_redo());
//! assert_eq!(editor.history().len(), 3);
//! ```

mod edit;
mod history;
mod selection;
mod snapshot;
mod transform;

pub use edit::EditHistory;
pub use history::{DEFAULT_MAX_HISTORY_DEPTH, HistoryLog, MIN_HISTORY_DEPTH};
pub use selection::Selection;
pub use snapshot::Snapshot;
pub use transform::{HeadingLevel, TransformCategory, TransformKind, Transformed};
