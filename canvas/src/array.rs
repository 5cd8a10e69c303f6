//! Growable, indexable storage with explicit doubling growth.
//!
//! [`DynArray`] tracks its own logical capacity so growth is predictable:
//! the first push allocates room for one element and every overflow doubles
//! it. Elements are relocated by move when the buffer grows or shrinks, never
//! cloned or rebuilt. Removal by index is unordered (swap with last, pop).

#[cfg(test)]
#[path = "array_test.rs"]
mod array_test;

use std::ops::{Index, IndexMut};

#[derive(Debug, Clone)]
pub struct DynArray<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynArray<T> {
    /// Create an empty array without allocating.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new(), capacity: 0 }
    }

    /// Number of stored elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the array holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Logical capacity: zero, or a power of two until [`Self::shrink_to_fit`] is called.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether a backing buffer is currently held.
    #[must_use]
    pub fn is_allocated(&self) -> bool {
        self.items.capacity() > 0
    }

    /// Append an element, doubling capacity (starting at 1) on overflow.
    pub fn push_back(&mut self, value: T) {
        if self.items.len() == self.capacity {
            let grown = if self.capacity == 0 { 1 } else { self.capacity * 2 };
            self.items.reserve_exact(grown - self.items.len());
            self.capacity = grown;
        }
        self.items.push(value);
    }

    /// Remove and return the last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn pop_back(&mut self) -> T {
        assert!(!self.items.is_empty(), "pop_back on an empty DynArray");
        let last = self.items.len() - 1;
        self.items.swap_remove(last)
    }

    /// Remove the element at `index`, moving the former last element into its slot.
    ///
    /// The caller must revisit `index` afterwards if it is iterating, since a
    /// different element now lives there.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn delete(&mut self, index: usize) -> T {
        assert!(
            index < self.items.len(),
            "delete index {index} out of range for DynArray of length {}",
            self.items.len()
        );
        self.items.swap_remove(index)
    }

    /// Reduce capacity to exactly the current length, releasing the buffer when empty.
    pub fn shrink_to_fit(&mut self) {
        self.items.shrink_to_fit();
        self.capacity = self.items.len();
    }

    /// Drop every element and release the buffer.
    pub fn clear(&mut self) {
        self.items = Vec::new();
        self.capacity = 0;
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    #[must_use]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        for item in iter {
            array.push_back(item);
        }
        array
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T> IntoIterator for DynArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
