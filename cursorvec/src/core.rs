use alloc::vec::Vec;
use core::mem::size_of;

use bytemuck::Pod;
use embedded_io::Error as _;

use crate::cursor::{PeekDirection, PAST_HEAD};
use crate::error::VectorError;
use crate::iter::{Iter, Reads, RevIter};
use crate::snapshot::{Snapshot, SnapshotStack};

/// Minimum number of element slots added whenever the storage has to grow.
pub const GROWTH_INCREMENT: usize = 20;

/// A growable vector with independent read and peek cursors and a stack of
/// saved cursor states.
///
/// Storage is split into written slots and live elements. `pop` only lowers
/// the live length, so the popped slot keeps its value and a later
/// [`restore`](CursorVec::restore) can bring it back. `clear` forgets the
/// written slots too, while keeping the allocation.
#[derive(Debug)]
pub struct CursorVec<T> {
    pub(crate) slots: Vec<T>,
    pub(crate) len: usize,
    pub(crate) read: usize,
    pub(crate) peek: usize,
    pub(crate) direction: PeekDirection,
    saves: SnapshotStack,
}

impl<T: Copy> CursorVec<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
            read: 0,
            peek: 0,
            direction: PeekDirection::Forward,
            saves: SnapshotStack::new(),
        }
    }

    /// Creates an empty vector with room for at least `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::AllocationFailed` if the allocation is refused.
    pub fn with_capacity(capacity: usize) -> Result<Self, VectorError> {
        let mut vector = Self::new();
        vector.reserve(capacity)?;
        Ok(vector)
    }

    /// Creates a vector holding a copy of `items`.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::AllocationFailed` if the allocation is refused.
    pub fn from_slice(items: &[T]) -> Result<Self, VectorError> {
        let mut vector = Self::new();
        vector.extend_from_slice(items)?;
        Ok(vector)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index the next `push` writes to.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Size of one element in bytes.
    #[must_use]
    pub const fn element_size(&self) -> usize {
        size_of::<T>()
    }

    /// Makes sure `additional` more elements fit without another allocation.
    ///
    /// Capacity grows in multiples of [`GROWTH_INCREMENT`] and never shrinks.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::AllocationFailed` if the allocation is refused.
    pub fn reserve(&mut self, additional: usize) -> Result<(), VectorError> {
        let needed = self
            .len
            .checked_add(additional)
            .ok_or(VectorError::AllocationFailed {
                requested: additional,
            })?;
        if needed <= self.slots.capacity() {
            return Ok(());
        }
        let missing = needed - self.slots.len();
        let requested = missing
            .div_ceil(GROWTH_INCREMENT)
            .saturating_mul(GROWTH_INCREMENT);
        self.slots
            .try_reserve_exact(requested)
            .map_err(|_| VectorError::AllocationFailed { requested })?;
        trace_event!(
            requested,
            capacity = self.slots.capacity(),
            "cursorvec storage grown"
        );
        Ok(())
    }

    /// Stores `value` at slot `pos`, which is at most one past the written slots.
    fn write_slot(&mut self, pos: usize, value: T) {
        if let Some(slot) = self.slots.get_mut(pos) {
            *slot = value;
        } else {
            self.slots.push(value);
        }
    }

    /// Appends an element.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::AllocationFailed` if the storage cannot grow.
    pub fn push(&mut self, value: T) -> Result<(), VectorError> {
        self.reserve(1)?;
        self.write_slot(self.len, value);
        self.len += 1;
        Ok(())
    }

    /// Inserts `value` at `index`, shifting the elements from `index` on
    /// one slot towards the end. `index == len()` appends.
    ///
    /// # Errors
    ///
    /// - `VectorError::OutOfRange` if `index > len()`
    /// - `VectorError::AllocationFailed` if the storage cannot grow
    pub fn push_at(&mut self, index: usize, value: T) -> Result<(), VectorError> {
        if index > self.len {
            return Err(VectorError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.reserve(1)?;
        self.write_slot(self.len, value);
        self.slots[index..=self.len].rotate_right(1);
        self.len += 1;
        self.shift_cursors_forward(index, 1);
        Ok(())
    }

    /// Appends a copy of every element of `items`.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::AllocationFailed` if the storage cannot grow.
    pub fn extend_from_slice(&mut self, items: &[T]) -> Result<(), VectorError> {
        self.reserve(items.len())?;
        for &item in items {
            self.write_slot(self.len, item);
            self.len += 1;
        }
        Ok(())
    }

    /// Copies all live elements of `src` into this vector starting at
    /// `index`, shifting the existing tail to make room.
    ///
    /// Returns the index the inserted block starts at.
    ///
    /// # Errors
    ///
    /// - `VectorError::OutOfRange` if `index > len()`
    /// - `VectorError::AllocationFailed` if the storage cannot grow
    pub fn insert_from(&mut self, src: &CursorVec<T>, index: usize) -> Result<usize, VectorError> {
        if index > self.len {
            return Err(VectorError::OutOfRange {
                index,
                len: self.len,
            });
        }
        let count = src.len();
        self.reserve(count)?;
        for (offset, &item) in src.as_slice().iter().enumerate() {
            self.write_slot(self.len + offset, item);
        }
        self.slots[index..self.len + count].rotate_right(count);
        self.len += count;
        self.shift_cursors_forward(index, count);
        Ok(index)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::Underflow` if the vector is empty.
    pub fn pop(&mut self) -> Result<T, VectorError> {
        if self.len == 0 {
            return Err(VectorError::Underflow);
        }
        self.len -= 1;
        Ok(self.slots[self.len])
    }

    /// Removes and returns the element at `index`, shifting the following
    /// elements one slot towards the start.
    ///
    /// Cursors past `index` move back by one so they keep pointing at the
    /// same element.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if `index >= len()`.
    pub fn pop_at(&mut self, index: usize) -> Result<T, VectorError> {
        if index >= self.len {
            return Err(VectorError::OutOfRange {
                index,
                len: self.len,
            });
        }
        let value = self.slots[index];
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        if self.read > index {
            self.read -= 1;
        }
        if self.peek > index && self.peek != PAST_HEAD {
            self.peek -= 1;
        }
        Ok(value)
    }

    /// Removes the first element equal to `value` and returns its former index.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::NotFound` if no element matches.
    pub fn pop_value(&mut self, value: &T) -> Result<usize, VectorError>
    where
        T: PartialEq,
    {
        let index = self
            .as_slice()
            .iter()
            .position(|item| item == value)
            .ok_or(VectorError::NotFound)?;
        self.pop_at(index)?;
        Ok(index)
    }

    /// Maps an address inside the live storage back to its element index.
    ///
    /// # Errors
    ///
    /// - `VectorError::NotFound` if `address` is outside the live elements
    /// - `VectorError::UnalignedAddress` if it points into the middle of one
    pub fn index_of_address(&self, address: *const T) -> Result<usize, VectorError> {
        let element_size = size_of::<T>();
        let base = self.slots.as_ptr() as usize;
        let offset = (address as usize)
            .checked_sub(base)
            .ok_or(VectorError::NotFound)?;
        if element_size == 0 {
            return if offset == 0 && self.len > 0 {
                Ok(0)
            } else {
                Err(VectorError::NotFound)
            };
        }
        if offset >= self.len * element_size {
            return Err(VectorError::NotFound);
        }
        if offset % element_size != 0 {
            return Err(VectorError::UnalignedAddress {
                offset,
                element_size,
            });
        }
        Ok(offset / element_size)
    }

    /// Removes the element stored at `address` and returns its former index.
    ///
    /// # Errors
    ///
    /// Same as [`index_of_address`](CursorVec::index_of_address).
    pub fn pop_at_address(&mut self, address: *const T) -> Result<usize, VectorError> {
        let index = self.index_of_address(address)?;
        self.pop_at(index)?;
        Ok(index)
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, VectorError> {
        self.get(index).ok_or(VectorError::OutOfRange {
            index,
            len: self.len,
        })
    }

    /// Returns the element at `index` for in-place modification.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::OutOfRange` if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, VectorError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(VectorError::OutOfRange { index, len })
    }

    /// Returns the element at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::Underflow` if the vector is empty.
    pub fn back(&self) -> Result<&T, VectorError> {
        self.back_or_none().ok_or(VectorError::Underflow)
    }

    #[must_use]
    pub fn back_or_none(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns a copy of the last element; for vectors of pointers this is
    /// the pointer itself.
    #[must_use]
    pub fn back_value(&self) -> Option<T> {
        self.back_or_none().copied()
    }

    /// Drops all elements and written slots. Capacity is kept.
    ///
    /// Cursors and snapshots are left alone.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.len = 0;
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.slots[..self.len]
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots[..self.len]
    }

    /// Start of the element storage.
    ///
    /// The pointer is valid until the next operation that grows the storage.
    #[must_use]
    pub fn as_ptr(&self) -> *const T {
        self.slots.as_ptr()
    }

    /// Returns an iterator over the live elements.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    /// Returns an iterator over the live elements, last to first.
    #[must_use]
    pub fn iter_rev(&self) -> RevIter<'_, T> {
        RevIter::new(self.as_slice())
    }

    /// Returns an iterator that consumes elements through the read cursor.
    ///
    /// Elements yielded by the iterator count as read.
    pub fn reads(&mut self) -> Reads<'_, T> {
        Reads::new(&self.slots[..self.len], &mut self.read)
    }

    /// Records the current length, cursors and peek direction.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::AllocationFailed` if the snapshot stack cannot grow.
    pub fn save(&mut self) -> Result<(), VectorError> {
        let snapshot = self.snapshot();
        self.saves.push(snapshot)?;
        trace_event!(depth = self.saves.depth(), len = self.len, "cursorvec saved");
        Ok(())
    }

    /// Pops the most recent snapshot and applies it, undoing pushes, pops and
    /// cursor moves made since the matching `save`. Element values changed in
    /// place are not undone.
    ///
    /// # Errors
    ///
    /// - `VectorError::EmptySnapshotStack` if there is no pending `save`
    /// - `VectorError::StaleSnapshot` if the saved length covers slots that
    ///   were cleared since; the snapshot stays on the stack
    pub fn restore(&mut self) -> Result<(), VectorError> {
        let snapshot = *self.saves.top().ok_or(VectorError::EmptySnapshotStack)?;
        if snapshot.len > self.slots.len() {
            return Err(VectorError::StaleSnapshot {
                saved_len: snapshot.len,
                available: self.slots.len(),
            });
        }
        self.saves.pop()?;
        self.len = snapshot.len;
        self.read = snapshot.read;
        self.peek = snapshot.peek;
        self.direction = snapshot.direction;
        trace_event!(depth = self.saves.depth(), len = self.len, "cursorvec restored");
        Ok(())
    }

    /// Discards the most recent snapshot without applying it and returns it.
    ///
    /// # Errors
    ///
    /// Returns `VectorError::EmptySnapshotStack` if there is no pending `save`.
    pub fn save_purge(&mut self) -> Result<Snapshot, VectorError> {
        let snapshot = self.saves.pop()?;
        trace_event!(depth = self.saves.depth(), "cursorvec save purged");
        Ok(snapshot)
    }

    /// Number of pending saves.
    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.saves.depth()
    }

    /// Current length, cursors and peek direction as a snapshot record.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            len: self.len,
            read: self.read,
            peek: self.peek,
            direction: self.direction,
        }
    }

    fn shift_cursors_forward(&mut self, index: usize, count: usize) {
        if self.read > index {
            self.read += count;
        }
        if self.peek > index && self.peek != PAST_HEAD {
            self.peek += count;
        }
    }
}

impl<T: Pod> CursorVec<T> {
    /// Live elements as raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }

    /// Appends up to `amount` elements read from `reader`, byte for byte.
    ///
    /// Reads until `amount` elements are filled or the reader reports end of
    /// input. Returns the number of whole elements appended; trailing bytes
    /// of an incomplete element are dropped.
    ///
    /// # Errors
    ///
    /// - `VectorError::AllocationFailed` if the storage cannot grow
    /// - `VectorError::Read` if the reader fails; nothing is appended then
    pub fn read_from<R: embedded_io::Read>(
        &mut self,
        amount: usize,
        reader: &mut R,
    ) -> Result<usize, VectorError> {
        let element_size = size_of::<T>();
        if amount == 0 || element_size == 0 {
            return Ok(0);
        }
        self.reserve(amount)?;

        let start = self.len;
        let written = self.slots.len();
        if written < start + amount {
            self.slots
                .resize(start + amount, bytemuck::Zeroable::zeroed());
        }

        let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut self.slots[start..start + amount]);
        let filled = match fill_from(reader, bytes) {
            Ok(filled) => filled,
            Err(kind) => {
                self.slots.truncate(written);
                return Err(VectorError::Read { kind });
            }
        };

        let obtained = filled / element_size;
        self.len += obtained;
        self.slots.truncate(written.max(self.len));
        Ok(obtained)
    }
}

/// Reads into `bytes` until it is full or the reader reaches end of input.
fn fill_from<R: embedded_io::Read>(
    reader: &mut R,
    bytes: &mut [u8],
) -> Result<usize, embedded_io::ErrorKind> {
    let mut filled = 0;
    while filled < bytes.len() {
        match reader.read(&mut bytes[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) => return Err(err.kind()),
        }
    }
    Ok(filled)
}

impl CursorVec<u8> {
    /// Live bytes as a string slice.
    ///
    /// # Errors
    ///
    /// Returns the UTF-8 error if the bytes are not valid UTF-8.
    pub fn as_str(&self) -> Result<&str, core::str::Utf8Error> {
        core::str::from_utf8(self.as_slice())
    }
}

impl<T: Copy> Default for CursorVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies the live elements. Cursors start over and saves are not carried over.
impl<T: Copy> Clone for CursorVec<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.as_slice().to_vec(),
            len: self.len,
            ..Self::new()
        }
    }
}

impl<'a, T: Copy> IntoIterator for &'a CursorVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
