//! Sequential read and peek cursors.
//!
//! The read cursor and the peek cursor are independent: peeking never
//! disturbs the read position. A cursor at or past `len()` is exhausted,
//! which is reported as `None` rather than as an error.

use crate::core::CursorVec;
use crate::error::VectorError;

/// Peek cursor value after a backward value peek has returned element 0.
pub const PAST_HEAD: usize = usize::MAX;

/// Direction in which [`CursorVec::peek_value`] moves the peek cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeekDirection {
    /// Consume from the head: the cursor advances after each peek.
    #[default]
    Forward,
    /// Consume from the tail: the cursor retreats after each peek.
    Backward,
}

impl<T: Copy> CursorVec<T> {
    /// Returns the element under the read cursor and advances it.
    pub fn read(&mut self) -> Option<&T> {
        if self.read >= self.len {
            return None;
        }
        self.read += 1;
        self.slots.get(self.read - 1)
    }

    /// Index of the next sequential read.
    #[must_use]
    pub fn read_index(&self) -> usize {
        self.read
    }

    /// Moves the read cursor back to the first element.
    pub fn rewind(&mut self) {
        self.read = 0;
    }

    /// Returns the element under the peek cursor and advances it.
    pub fn peek(&mut self) -> Option<&T> {
        if self.peek >= self.len {
            return None;
        }
        self.peek += 1;
        self.slots.get(self.peek - 1)
    }

    /// Returns the element under the peek cursor without moving it.
    #[must_use]
    pub fn peek_no_increment(&self) -> Option<&T> {
        self.get(self.peek)
    }

    /// Returns the element at `index` without touching any cursor.
    #[must_use]
    pub fn peek_at(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    /// Index of the next peek; [`PAST_HEAD`] once a backward walk is done.
    #[must_use]
    pub fn peek_index(&self) -> usize {
        self.peek
    }

    /// Steps the peek cursor back by one, so the next peek repeats the last one.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::Underflow` if the cursor is already at the head.
    pub fn peek_back(&mut self) -> Result<(), VectorError> {
        if self.peek == 0 || self.peek == PAST_HEAD {
            return Err(VectorError::Underflow);
        }
        self.peek -= 1;
        Ok(())
    }

    /// Removes the element returned by the last peek in the current
    /// [`PeekDirection`].
    ///
    /// Going forward that is the element before the peek cursor, and the
    /// cursor moves back with it, so the next peek returns the element that
    /// followed the removed one. Going backward it is the element after the
    /// cursor (element 0 once the cursor is parked at [`PAST_HEAD`]), and the
    /// cursor stays where it is.
    ///
    /// # Errors
    ///
    /// - `VectorError::Underflow` if nothing has been peeked
    /// - `VectorError::OutOfRange` if the peeked element is no longer live
    pub fn pop_last_peek(&mut self) -> Result<T, VectorError> {
        match self.direction {
            PeekDirection::Forward => self.pop_last_forward_peek(),
            PeekDirection::Backward => {
                let index = if self.peek == PAST_HEAD { 0 } else { self.peek + 1 };
                if index >= self.len {
                    return Err(VectorError::Underflow);
                }
                self.pop_at(index)
            }
        }
    }

    fn pop_last_forward_peek(&mut self) -> Result<T, VectorError> {
        if self.peek == 0 || self.peek == PAST_HEAD {
            return Err(VectorError::Underflow);
        }
        self.pop_at(self.peek - 1)
    }

    /// Peeks forward and removes the peeked element in one step.
    pub fn peek_pop(&mut self) -> Option<T> {
        self.peek()?;
        self.pop_last_forward_peek().ok()
    }

    #[must_use]
    pub fn peek_direction(&self) -> PeekDirection {
        self.direction
    }

    /// Selects the direction used by [`peek_value`](CursorVec::peek_value).
    pub fn set_peek_direction(&mut self, direction: PeekDirection) {
        self.direction = direction;
    }

    /// Returns a copy of the element under the peek cursor and moves the
    /// cursor in the current [`PeekDirection`].
    ///
    /// For a vector of pointers or references this yields the pointer itself.
    pub fn peek_value(&mut self) -> Option<T> {
        match self.direction {
            PeekDirection::Forward => self.peek_value_from_head(),
            PeekDirection::Backward => self.peek_value_from_tail(),
        }
    }

    /// Returns a copy of the element under the peek cursor and advances it.
    pub fn peek_value_from_head(&mut self) -> Option<T> {
        self.peek().copied()
    }

    /// Returns a copy of the element under the peek cursor and retreats it.
    ///
    /// After element 0 has been returned the cursor is parked at
    /// [`PAST_HEAD`] and further backward peeks yield `None`.
    pub fn peek_value_from_tail(&mut self) -> Option<T> {
        let value = self.peek_no_increment().copied()?;
        self.peek = self.peek.checked_sub(1).unwrap_or(PAST_HEAD);
        Some(value)
    }

    /// Returns a copy of the element at `index` without touching any cursor.
    #[must_use]
    pub fn peek_value_at(&self, index: usize) -> Option<T> {
        self.get(index).copied()
    }

    /// Places the peek cursor at `index`. The index is not checked; a cursor
    /// past the end simply yields nothing.
    pub fn set_peek_pointer(&mut self, index: usize) {
        self.peek = index;
    }

    /// Places the peek cursor on the last element, ready for a backward walk.
    pub fn set_peek_pointer_end(&mut self) {
        self.peek = self.len.saturating_sub(1);
    }
}
