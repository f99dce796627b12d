//! `markdraft` - Undo/redo history for rich content editors
//!
//! Keeps a linear history of full-text snapshots for an editable document and
//! applies markdown formatting commands (bold, headings, lists, links, ...)
//! as undoable edits. The host owns the document value and receives every
//! committed change through a callback.

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // Allow text::TransformKind etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::should_implement_trait)] // from_str naming is intentional
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod error;
pub mod event;
pub mod text;
pub mod unicode;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use event::{
    LogLevel, clear_event_callback, clear_log_callback, emit_event, emit_log, set_event_callback,
    set_log_callback,
};
pub use text::{
    DEFAULT_MAX_HISTORY_DEPTH, EditHistory, HeadingLevel, HistoryLog, MIN_HISTORY_DEPTH, Selection, Snapshot,
    TransformCategory, TransformKind, Transformed,
};
