#![no_std]

//! `CursorVec`: a growable vector with read and peek cursors and a snapshot stack.
//!
//! `CursorVec<T>` stores `Copy` elements contiguously and layers stream-like
//! consumption on top of them: a sequential read cursor, an independent peek
//! cursor for lookahead, and value peeks that walk a vector of pointers from
//! either end. A stack of saved cursor states gives cheap backtracking for
//! speculative scanning: save, try something, restore on failure.
//!
//! The crate is `no_std` and needs only `alloc`. Enable the `std` feature to
//! get `tracing` events for growth and snapshot activity.
//!
//! # Storage and Growth
//!
//! Capacity grows in steps of [`GROWTH_INCREMENT`] elements and is never
//! released automatically. All fallible operations report problems through
//! [`VectorError`]; allocation failure is its own variant.
//!
//! ```
//! # use cursorvec::CursorVec;
//! let mut vector = CursorVec::new();
//! vector.push(10).unwrap();
//! vector.push(30).unwrap();
//! vector.push_at(1, 20).unwrap();
//!
//! assert_eq!(vector.as_slice(), &[10, 20, 30]);
//! assert_eq!(vector.pop_value(&20), Ok(1));
//! assert!(vector.at(2).is_err());
//! ```
//!
//! # Cursors
//!
//! ```
//! # use cursorvec::CursorVec;
//! let mut tokens = CursorVec::from_slice(&["let", "x", "=", "1"]).unwrap();
//!
//! assert_eq!(tokens.read(), Some(&"let"));
//! assert_eq!(tokens.peek(), Some(&"let"));
//! assert_eq!(tokens.peek(), Some(&"x"));
//!
//! // Peeking does not move the read cursor
//! assert_eq!(tokens.read(), Some(&"x"));
//! ```
//!
//! Value peeks copy the element out, which for a vector of pointers or
//! references is the pointee handle. The [`PeekDirection`] decides whether a
//! walk consumes from the head or from the tail:
//!
//! ```
//! # use cursorvec::{CursorVec, PeekDirection};
//! let (a, b) = (1, 2);
//! let mut stack = CursorVec::from_slice(&[&a, &b]).unwrap();
//! stack.set_peek_direction(PeekDirection::Backward);
//! stack.set_peek_pointer_end();
//!
//! assert_eq!(stack.peek_value(), Some(&2));
//! assert_eq!(stack.peek_value(), Some(&1));
//! assert_eq!(stack.peek_value(), None);
//! ```
//!
//! # Snapshots
//!
//! ```
//! # use cursorvec::CursorVec;
//! let mut vector = CursorVec::from_slice(b"abc").unwrap();
//!
//! vector.save().unwrap();
//! vector.read();
//! vector.pop().unwrap();
//! vector.push(b'z').unwrap();
//! vector.restore().unwrap();
//!
//! assert_eq!(vector.read_index(), 0);
//! assert_eq!(vector.len(), 3);
//! ```
//!
//! `restore` only resets the length and cursors; element values overwritten
//! after the `save` stay overwritten (above, the last element is now `z`).

extern crate alloc;

macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "std")]
        tracing::trace!($($arg)*);
    };
}

mod core;
mod cursor;
mod error;
mod iter;
mod snapshot;

// Re-export public types and traits
pub use crate::core::{CursorVec, GROWTH_INCREMENT};
pub use cursor::{PeekDirection, PAST_HEAD};
pub use error::VectorError;
pub use iter::{Iter, Reads, RevIter};
pub use snapshot::{Snapshot, SnapshotStack};
