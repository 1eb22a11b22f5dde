//! Saved cursor state for speculative scanning.

use alloc::vec::Vec;

use crate::cursor::PeekDirection;
use crate::error::VectorError;

/// Length and cursor state of a `CursorVec` at the moment of a `save`.
///
/// Element data is not part of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Number of live elements
    pub len: usize,
    /// Sequential read cursor
    pub read: usize,
    /// Peek cursor
    pub peek: usize,
    /// Direction of pointer-value peeks
    pub direction: PeekDirection,
}

/// LIFO stack of `Snapshot` records owned by one `CursorVec`.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStack {
    records: Vec<Snapshot>,
}

impl SnapshotStack {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Pushes a record.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::AllocationFailed` if the stack cannot grow.
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), VectorError> {
        self.records
            .try_reserve(1)
            .map_err(|_| VectorError::AllocationFailed { requested: 1 })?;
        self.records.push(snapshot);
        Ok(())
    }

    /// Removes and returns the most recent record.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::EmptySnapshotStack` if nothing is saved.
    pub fn pop(&mut self) -> Result<Snapshot, VectorError> {
        self.records.pop().ok_or(VectorError::EmptySnapshotStack)
    }

    /// Returns the most recent record without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&Snapshot> {
        self.records.last()
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
