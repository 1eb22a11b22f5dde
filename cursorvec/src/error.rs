use thiserror::Error;

/// Error types for `CursorVec` operations
///
/// Every variant except `AllocationFailed` and `Read` reports a usage error
/// that was detected before the vector was modified.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum VectorError {
    /// Index is outside the live elements
    #[error("Index out of range: index {index} is beyond vector length {len}")]
    OutOfRange {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        len: usize,
    },
    /// Pop or cursor retreat with nothing left to remove or step over
    #[error("Underflow: nothing to pop or step back over")]
    Underflow,
    /// `restore` or `save_purge` without a pending `save`
    #[error("Snapshot stack is empty")]
    EmptySnapshotStack,
    /// Value or address is not present among the live elements
    #[error("Element not found")]
    NotFound,
    /// Address points inside the storage but not at the start of an element
    #[error("Unaligned address: byte offset {offset} is not a multiple of element size {element_size}")]
    UnalignedAddress {
        /// Byte offset from the start of the storage
        offset: usize,
        /// Size of one element in bytes
        element_size: usize,
    },
    /// Saved length refers to slots that no longer hold written elements
    #[error("Stale snapshot: saved length {saved_len} exceeds {available} written slots")]
    StaleSnapshot {
        /// Length recorded by the snapshot
        saved_len: usize,
        /// Number of slots that currently hold written elements
        available: usize,
    },
    /// The allocator refused to grow the storage
    #[error("Allocation failed: could not reserve {requested} more elements")]
    AllocationFailed {
        /// Number of additional elements requested
        requested: usize,
    },
    /// The byte source of a bulk read failed
    #[error("Read failed: {kind:?}")]
    Read {
        /// Kind of the underlying reader error
        kind: embedded_io::ErrorKind,
    },
}
