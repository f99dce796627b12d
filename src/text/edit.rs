//! Editor-facing history component.
//!
//! [`EditHistory`] is what a content editor holds for its lifetime. The host
//! owns the document value; the component keeps the undo log, applies
//! commands, and reports every committed value back through `on_change`.
//!
//! # Examples
//!
//! ```
//! use markdraft::{EditHistory, Selection, TransformKind};
//!
//! let mut editor = EditHistory::new("hello world");
//! editor.apply_transform(Selection::new(6, 11), &TransformKind::WrapBold);
//! assert_eq!(editor.text(), "hello **world**");
//!
//! // Undo restores the previous snapshot
//! editor.undo();
//! assert_eq!(editor.text(), "hello world");
//!
//! // Redo brings it back
//! editor.redo();
//! assert_eq!(editor.text(), "hello **world**");
//! ```

use crate::event::{LogLevel, emit_log_with};
use crate::text::{HistoryLog, Selection, Snapshot, TransformKind};

type ChangeCallback = Box<dyn FnMut(&str) + 'static>;
type AssistCallback = Box<dyn FnMut() + 'static>;

/// Undo/redo history of one editor instance plus its host callbacks.
///
/// Every operation runs to completion synchronously. Commit granularity is
/// the caller's choice: each [`apply_raw_edit`](Self::apply_raw_edit) is one
/// history entry, so hosts that want to batch keystrokes call it on pause or
/// blur rather than on every key.
pub struct EditHistory {
    log: HistoryLog,
    on_change: Option<ChangeCallback>,
    on_ai_assist: Option<AssistCallback>,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new("")
    }
}

impl std::fmt::Debug for EditHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditHistory")
            .field("log", &self.log)
            .field("on_change", &self.on_change.is_some())
            .field("on_ai_assist", &self.on_ai_assist.is_some())
            .finish()
    }
}

impl EditHistory {
    /// Create a history seeded with the host's initial value.
    #[must_use]
    pub fn new(initial: &str) -> Self {
        Self::from_log(HistoryLog::new(initial))
    }

    /// Create a history with a custom maximum undo depth.
    ///
    /// The default is 1000 snapshots. Since snapshots share rope storage the
    /// cost of a deep history is mostly the edited text itself.
    #[must_use]
    pub fn with_max_history_depth(initial: &str, max_depth: usize) -> Self {
        Self::from_log(HistoryLog::with_max_depth(initial, max_depth))
    }

    fn from_log(log: HistoryLog) -> Self {
        Self {
            log,
            on_change: None,
            on_ai_assist: None,
        }
    }

    /// Register the callback that receives every committed value.
    pub fn set_on_change<F>(&mut self, callback: F)
    where
        F: FnMut(&str) + 'static,
    {
        self.on_change = Some(Box::new(callback));
    }

    /// Register the AI-assist trigger.
    pub fn set_on_ai_assist<F>(&mut self, callback: F)
    where
        F: FnMut() + 'static,
    {
        self.on_ai_assist = Some(Box::new(callback));
    }

    /// Fire the AI-assist trigger. Returns `false` if none is registered.
    ///
    /// The history is not touched; whatever the assistant produces comes back
    /// through [`apply_raw_edit`](Self::apply_raw_edit) like any other edit.
    pub fn request_ai_assist(&mut self) -> bool {
        match self.on_ai_assist.as_mut() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Set the maximum undo depth.
    ///
    /// Pruning happens immediately. If the current entry is pruned the host
    /// is told the new current value.
    pub fn set_max_history_depth(&mut self, max_depth: usize) {
        let before = self.log.current().clone();
        self.log.set_max_depth(max_depth);
        if *self.log.current() != before {
            self.notify();
        }
    }

    /// Get the current maximum undo depth.
    #[must_use]
    pub fn max_history_depth(&self) -> usize {
        self.log.max_depth()
    }

    /// Get the current text.
    #[must_use]
    pub fn text(&self) -> String {
        self.log.current().to_string()
    }

    /// Get the current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        self.log.current()
    }

    /// Read-only view of the undo log.
    #[must_use]
    pub fn history(&self) -> &HistoryLog {
        &self.log
    }

    /// Commit a full replacement of the document, as produced by typing.
    pub fn apply_raw_edit(&mut self, new_text: &str) {
        self.log.commit(Snapshot::from_str(new_text));
        self.notify_with(new_text);
    }

    /// Apply a formatting command at `selection`.
    ///
    /// Returns the selection the host should restore, or `None` when the
    /// command was a no-op (wrap with nothing selected, insertion without a
    /// URL, or markup identical to the text it replaces). No-ops leave the
    /// history and the host untouched.
    pub fn apply_transform(
        &mut self,
        selection: Selection,
        kind: &TransformKind,
    ) -> Option<Selection> {
        let Some(out) = kind.apply(self.log.current(), selection) else {
            emit_log_with(LogLevel::Debug, || {
                format!("transform {kind:?} at {selection:?} is a no-op")
            });
            return None;
        };
        if out.snapshot == *self.log.current() {
            emit_log_with(LogLevel::Debug, || {
                format!("transform {kind:?} at {selection:?} left the text unchanged")
            });
            return None;
        }
        self.log.commit(out.snapshot);
        self.notify();
        Some(out.selection)
    }

    /// Step back one entry. Returns `false` at the oldest entry.
    pub fn undo(&mut self) -> bool {
        if self.log.step_back().is_none() {
            return false;
        }
        self.notify();
        true
    }

    /// Step forward one entry. Returns `false` at the newest entry.
    pub fn redo(&mut self) -> bool {
        if self.log.step_forward().is_none() {
            return false;
        }
        self.notify();
        true
    }

    /// Check if undo is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.log.can_undo()
    }

    /// Check if redo is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.log.can_redo()
    }

    /// Reconcile with the value the host currently holds.
    ///
    /// When `value` differs from the current entry (the host reset or
    /// replaced the document), the log is reseeded with it and `true` is
    /// returned. `on_change` is not called: the host already has the value.
    pub fn sync(&mut self, value: &str) -> bool {
        if self.log.current().matches(value) {
            return false;
        }
        self.log.reseed(value);
        true
    }

    /// Drop all undo/redo entries, keeping the current value.
    pub fn clear_history(&mut self) {
        let current = self.log.current().clone();
        self.log.reseed(current);
    }

    fn notify(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(&self.log.current().to_string());
        }
    }

    fn notify_with(&mut self, text: &str) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(text);
        }
    }
}
