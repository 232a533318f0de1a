//! Bounded undo history of session snapshots.

use std::collections::VecDeque;

use warehouse_core::CellCoord;

use crate::grid::Grid;

/// Number of snapshots retained for undo unless reconfigured.
pub(crate) const DEFAULT_UNDO_DEPTH: usize = 100;

/// Immutable copy of the live session captured before an accepted move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// Grid at the time of capture.
    pub grid: Grid,
    /// Player position at the time of capture.
    pub player: CellCoord,
    /// Accepted-move count at the time of capture.
    pub move_count: u32,
    /// Completion flag at the time of capture.
    pub completed: bool,
}

/// Bounded stack of session snapshots.
///
/// Pushing at capacity evicts the oldest entry, so the stack always holds
/// the most recent snapshots. Only accepted moves are recorded; rejected
/// moves never reach the history.
#[derive(Clone, Debug)]
pub struct UndoHistory {
    snapshots: VecDeque<Snapshot>,
    capacity: usize,
}

impl UndoHistory {
    /// Creates an empty history bounded to the provided capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            snapshots: VecDeque::new(),
            capacity,
        }
    }

    /// Appends a snapshot, evicting the oldest entry when at capacity.
    pub fn push(&mut self, snapshot: Snapshot) {
        if self.capacity == 0 {
            return;
        }
        if self.snapshots.len() == self.capacity {
            let _ = self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    /// Removes and returns the most recent snapshot, if any exists.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop_back()
    }

    /// Discards every retained snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Number of snapshots currently retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Reports whether no snapshot is retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Maximum number of snapshots the history retains.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Resizes the history, evicting the oldest snapshots when shrinking.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.snapshots.len() > capacity {
            let _ = self.snapshots.pop_front();
        }
    }
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new(DEFAULT_UNDO_DEPTH)
    }
}
