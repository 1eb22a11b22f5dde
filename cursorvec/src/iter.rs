/// Iterator over the live elements of a `CursorVec`
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct Iter<'a, T> {
    items: &'a [T],
    current: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self { items, current: 0 }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.current)?;
        self.current += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len() - self.current;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Reverse iterator over the live elements of a `CursorVec`
///
/// This iterator implements `Clone`.
#[derive(Clone)]
pub struct RevIter<'a, T> {
    items: &'a [T],
    current: usize,
}

impl<'a, T> RevIter<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Self {
        Self {
            items,
            current: items.len(),
        }
    }
}

impl<'a, T> Iterator for RevIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == 0 {
            return None;
        }
        self.current -= 1;
        self.items.get(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.current, Some(self.current))
    }
}

impl<T> ExactSizeIterator for RevIter<'_, T> {}

/// Iterator that consumes elements through the read cursor of a `CursorVec`
///
/// Dropping the iterator early leaves the read cursor after the last
/// element it yielded.
pub struct Reads<'a, T> {
    items: &'a [T],
    cursor: &'a mut usize,
}

impl<'a, T> Reads<'a, T> {
    pub(crate) fn new(items: &'a [T], cursor: &'a mut usize) -> Self {
        Self { items, cursor }
    }
}

impl<'a, T> Iterator for Reads<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(*self.cursor)?;
        *self.cursor += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len().saturating_sub(*self.cursor);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Reads<'_, T> {}
