//! Snapshot-based undo/redo history.
//!
//! A linear list of whole-model snapshots plus a cursor. Pushing while redo
//! entries exist truncates the abandoned future first; the list is capped and
//! drops its oldest entries once full. Restoring (undo/redo) never pushes.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::model::ModelSnapshot;

/// Default maximum number of history entries kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// One saved model state.
#[derive(Clone, Debug)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub snapshot: ModelSnapshot,
}

impl HistoryEntry {
    fn new(snapshot: ModelSnapshot) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            snapshot,
        }
    }
}

/// Linear snapshot history with a cursor.
///
/// Invariant: `cursor` always points at a valid entry, and the entry under
/// the cursor matches the live model state between mutations.
#[derive(Debug)]
pub struct SnapshotHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
    limit: usize,
}

impl SnapshotHistory {
    /// Create a history seeded with the initial state as entry zero.
    pub fn new(initial: ModelSnapshot, limit: usize) -> Self {
        Self {
            entries: vec![HistoryEntry::new(initial)],
            cursor: 0,
            // A single-entry history still needs room for its seed.
            limit: limit.max(1),
        }
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> &ModelSnapshot {
        &self.entries[self.cursor].snapshot
    }

    /// Append a snapshot after the cursor, discarding any redoable future.
    ///
    /// A snapshot identical to the current entry is skipped, so committing a
    /// gesture that ended up changing nothing leaves history untouched.
    pub fn push(&mut self, snapshot: ModelSnapshot) {
        if snapshot == *self.current() {
            return;
        }

        self.entries.truncate(self.cursor + 1);
        self.entries.push(HistoryEntry::new(snapshot));
        self.cursor = self.entries.len() - 1;

        if self.entries.len() > self.limit {
            let excess = self.entries.len() - self.limit;
            self.entries.drain(0..excess);
            self.cursor -= excess;
        }

        tracing::debug!(
            "history push: {} entries, cursor at {}",
            self.entries.len(),
            self.cursor
        );
    }

    /// Step the cursor back and return the snapshot to restore.
    pub fn undo(&mut self) -> Option<&ModelSnapshot> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        tracing::debug!("history undo: cursor at {}", self.cursor);
        Some(&self.entries[self.cursor].snapshot)
    }

    /// Step the cursor forward and return the snapshot to restore.
    pub fn redo(&mut self) -> Option<&ModelSnapshot> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        tracing::debug!("history redo: cursor at {}", self.cursor);
        Some(&self.entries[self.cursor].snapshot)
    }

    /// Recent entries, newest first, for a history panel.
    pub fn recent_entries(&self, count: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(count).collect()
    }
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::new(ModelSnapshot::default(), DEFAULT_HISTORY_LIMIT)
    }
}
