//! Linear snapshot history with a cursor.
//!
//! [`HistoryLog`] is a tape of full-text [`Snapshot`]s with a read/write head.
//! Undo and redo move the head without touching the tape. A commit cuts the
//! tape after the head, writes the new snapshot, and moves the head onto it,
//! so redo entries are discarded on a fresh edit (branch-on-write, not an
//! undo tree).

use crate::event::{LogLevel, emit_history_event, emit_log_with};
use crate::text::Snapshot;

/// Default maximum number of snapshots to retain.
pub const DEFAULT_MAX_HISTORY_DEPTH: usize = 1000;

/// Smallest depth that still keeps the entry before a fresh commit, so undo
/// right after any commit always has somewhere to go.
pub const MIN_HISTORY_DEPTH: usize = 2;

/// Snapshot history with bounded memory usage.
///
/// Never empty: it is seeded with the initial document, and `cursor` always
/// indexes a valid entry.
#[derive(Clone, Debug)]
pub struct HistoryLog {
    entries: Vec<Snapshot>,
    cursor: usize,
    /// Maximum number of entries to retain. Oldest entries are dropped when exceeded.
    max_depth: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(Snapshot::new())
    }
}

impl HistoryLog {
    /// Create a log seeded with the initial document.
    #[must_use]
    pub fn new(initial: impl Into<Snapshot>) -> Self {
        Self::with_max_depth(initial, DEFAULT_MAX_HISTORY_DEPTH)
    }

    /// Create a log with a custom maximum depth (at least [`MIN_HISTORY_DEPTH`]).
    #[must_use]
    pub fn with_max_depth(initial: impl Into<Snapshot>, max_depth: usize) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
            max_depth: max_depth.max(MIN_HISTORY_DEPTH),
        }
    }

    /// The snapshot under the cursor.
    #[must_use]
    pub fn current(&self) -> &Snapshot {
        &self.entries[self.checked_cursor()]
    }

    /// Index of the current entry.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.checked_cursor()
    }

    /// Number of entries, including those ahead of the cursor.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries, oldest first.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = &Snapshot> {
        self.entries.iter()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.checked_cursor() > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.checked_cursor() + 1 < self.entries.len()
    }

    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Set the maximum depth (at least [`MIN_HISTORY_DEPTH`]), pruning the
    /// oldest entries now if the log is already longer.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth.max(MIN_HISTORY_DEPTH);
        self.enforce_depth();
    }

    /// Discard entries after the cursor, append `snapshot`, and move onto it.
    pub fn commit(&mut self, snapshot: Snapshot) {
        let cursor = self.checked_cursor();
        let discarded = self.entries.len() - (cursor + 1);
        self.entries.truncate(cursor + 1);
        self.entries.push(snapshot);
        self.cursor = self.entries.len() - 1;
        self.enforce_depth();

        emit_log_with(LogLevel::Debug, || {
            format!(
                "history commit: cursor={} len={} discarded_redo={discarded}",
                self.cursor,
                self.entries.len()
            )
        });
        emit_history_event("history.commit", self.cursor, self.entries.len());
    }

    /// Move back one entry. Returns the new current snapshot, or `None` at
    /// the oldest entry.
    pub fn step_back(&mut self) -> Option<&Snapshot> {
        let cursor = self.checked_cursor();
        if cursor == 0 {
            return None;
        }
        self.cursor = cursor - 1;
        emit_log_with(LogLevel::Debug, || {
            format!("history undo: cursor={}", self.cursor)
        });
        emit_history_event("history.undo", self.cursor, self.entries.len());
        Some(&self.entries[self.cursor])
    }

    /// Move forward one entry. Returns the new current snapshot, or `None` at
    /// the newest entry.
    pub fn step_forward(&mut self) -> Option<&Snapshot> {
        let cursor = self.checked_cursor();
        if cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor = cursor + 1;
        emit_log_with(LogLevel::Debug, || {
            format!("history redo: cursor={}", self.cursor)
        });
        emit_history_event("history.redo", self.cursor, self.entries.len());
        Some(&self.entries[self.cursor])
    }

    /// Reset to a single entry holding `snapshot`.
    pub fn reseed(&mut self, snapshot: impl Into<Snapshot>) {
        let dropped = self.entries.len();
        self.entries.clear();
        self.entries.push(snapshot.into());
        self.cursor = 0;
        emit_log_with(LogLevel::Debug, || {
            format!("history reseed: dropped {dropped} entries")
        });
        emit_history_event("history.reseed", 0, 1);
    }

    fn enforce_depth(&mut self) {
        if self.entries.len() > self.max_depth {
            let excess = self.entries.len() - self.max_depth;
            self.entries.drain(..excess);
            self.cursor = self.cursor.saturating_sub(excess);
            emit_log_with(LogLevel::Debug, || {
                format!("history pruned {excess} oldest entries")
            });
        }
    }

    /// The cursor, clamped into range in release builds.
    fn checked_cursor(&self) -> usize {
        debug_assert!(
            self.cursor < self.entries.len(),
            "history cursor {} out of range for {} entries",
            self.cursor,
            self.entries.len()
        );
        if self.cursor < self.entries.len() {
            self.cursor
        } else {
            emit_log_with(LogLevel::Warn, || {
                format!(
                    "history cursor {} out of range for {} entries; clamping",
                    self.cursor,
                    self.entries.len()
                )
            });
            self.entries.len().saturating_sub(1)
        }
    }
}
