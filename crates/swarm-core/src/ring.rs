//! Fixed-capacity ring buffer.
//!
//! Storage is a slot arena that never grows past `N`; once full, each push
//! overwrites the oldest slot and advances the head index. Iteration always
//! yields items oldest first.

use std::iter::Chain;
use std::slice::Iter;

#[derive(Debug, Clone, PartialEq)]
pub struct RingBuffer<T, const N: usize> {
    slots: Vec<T>,
    /// Index of the oldest item once the arena is full.
    head: usize,
}

impl<T, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> RingBuffer<T, N> {
    pub fn new() -> Self {
        Self {
            slots: Vec::with_capacity(N),
            head: 0,
        }
    }

    /// Append an item, returning the evicted oldest item when full.
    pub fn push(&mut self, item: T) -> Option<T> {
        if N == 0 {
            return Some(item);
        }
        if self.slots.len() < N {
            self.slots.push(item);
            return None;
        }
        let evicted = std::mem::replace(&mut self.slots[self.head], item);
        self.head = (self.head + 1) % N;
        Some(evicted)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() == N
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Oldest-first iterator.
    pub fn iter(&self) -> Chain<Iter<'_, T>, Iter<'_, T>> {
        let (newer, older) = self.slots.split_at(self.head);
        older.iter().chain(newer.iter())
    }

    /// Most recently pushed item.
    pub fn latest(&self) -> Option<&T> {
        if self.slots.is_empty() {
            return None;
        }
        let idx = (self.head + self.slots.len() - 1) % self.slots.len();
        self.slots.get(idx)
    }

    /// Oldest retained item.
    pub fn oldest(&self) -> Option<&T> {
        self.iter().next()
    }
}

impl<T: Clone, const N: usize> RingBuffer<T, N> {
    /// Copy of the contents, oldest first.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a RingBuffer<T, N> {
    type Item = &'a T;
    type IntoIter = Chain<Iter<'a, T>, Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
