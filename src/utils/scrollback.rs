//! Bounded scrollback buffer for terminal output.

use std::collections::VecDeque;

/// Fixed-capacity FIFO of rendered lines.
///
/// Pushing past capacity drops the oldest entry, so memory stays bounded no
/// matter how long a session runs.
#[derive(Clone, Debug)]
pub struct Scrollback<T> {
    lines: VecDeque<T>,
    capacity: usize,
}

impl<T> Scrollback<T> {
    /// Create an empty buffer.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Scrollback capacity must be greater than 0");
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, item: T) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(item);
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = T>) {
        for item in items {
            self.push(item);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.lines.iter()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}
