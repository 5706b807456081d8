//! Contiguous growable sequence with amortized doubling growth.
//!
//! [`GrowSeq`] stores its elements in a single contiguous backing block and
//! doubles that block's capacity whenever an append finds it full. Doubling
//! (rather than linear growth) bounds the total element moves across N
//! appends from capacity 1 by 2N, so append is O(1) amortized despite the
//! O(n) worst case on a growth step.

use crate::error::SequenceError;

/// A contiguous, index-addressable sequence with amortized O(1) append.
///
/// Created empty with capacity 1. When an append finds the block full, a
/// new block of exactly twice the capacity is reserved, all elements are
/// moved into it in order, and the old block is released. A failed
/// reservation leaves the sequence untouched — nothing visible mutates
/// until the new block is secured.
///
/// Capacity never shrinks; [`remove_last`](GrowSeq::remove_last) releases
/// the element but keeps the block.
#[derive(Debug)]
pub struct GrowSeq<T> {
    /// Backing block. Its length is the logical element count; its
    /// reservation always covers `capacity` elements.
    storage: Vec<T>,
    /// Logical capacity. Tracked separately from the allocator's actual
    /// reservation (which may round up), so the doubling policy is exact.
    capacity: usize,
    /// Number of growth reallocations performed.
    growth_count: usize,
    /// Total elements moved across all growth steps.
    elements_moved: usize,
}

impl<T> GrowSeq<T> {
    /// Create an empty sequence with capacity 1.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Create an empty sequence with the given capacity (clamped to at
    /// least 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            storage: Vec::with_capacity(capacity),
            capacity,
            growth_count: 0,
            elements_moved: 0,
        }
    }

    /// Number of elements currently stored.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Size of the backing block in elements. Always `>= len()` and `>= 1`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the element at `index`.
    ///
    /// Returns [`SequenceError::OutOfRange`] for any `index >= len()`; the
    /// check happens before any read and failure never mutates state.
    pub fn get(&self, index: usize) -> Result<&T, SequenceError> {
        self.storage.get(index).ok_or(SequenceError::OutOfRange {
            index,
            len: self.storage.len(),
        })
    }

    /// Append `element` at the logical end.
    ///
    /// Grows the backing block to twice its capacity first if it is full.
    /// Returns [`SequenceError::AllocationFailed`] if the new block cannot
    /// be reserved, in which case length, capacity, and contents are
    /// unchanged.
    pub fn append(&mut self, element: T) -> Result<(), SequenceError> {
        if self.storage.len() == self.capacity {
            let doubled = self
                .capacity
                .checked_mul(2)
                .ok_or(SequenceError::AllocationFailed {
                    requested: usize::MAX,
                })?;
            self.grow(doubled)?;
        }
        // Spare capacity is guaranteed here, so this push never reallocates
        // behind the capacity accounting's back.
        self.storage.push(element);
        Ok(())
    }

    /// The last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.storage.last()
    }

    /// Remove and return the last element, if any.
    ///
    /// Capacity is unchanged — the block is never shrunk.
    pub fn remove_last(&mut self) -> Option<T> {
        self.storage.pop()
    }

    /// The elements as a contiguous slice.
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage.iter()
    }

    /// Number of growth reallocations performed so far.
    pub fn growth_count(&self) -> usize {
        self.growth_count
    }

    /// Total elements moved across all growth steps.
    ///
    /// Under the doubling policy this stays below `2 * len()` for any
    /// append-only history.
    pub fn elements_moved(&self) -> usize {
        self.elements_moved
    }

    /// Reserved size of the backing block in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.capacity * std::mem::size_of::<T>()
    }

    /// Replace the backing block with one of exactly `new_capacity`
    /// elements, moving all existing elements into it in order.
    ///
    /// The reservation happens before anything visible mutates; the old
    /// block is released when the new one is installed.
    fn grow(&mut self, new_capacity: usize) -> Result<(), SequenceError> {
        let mut block: Vec<T> = Vec::new();
        block
            .try_reserve_exact(new_capacity)
            .map_err(|_| SequenceError::AllocationFailed {
                requested: new_capacity,
            })?;
        let moved = self.storage.len();
        block.append(&mut self.storage);
        self.storage = block;
        self.capacity = new_capacity;
        self.growth_count += 1;
        self.elements_moved += moved;
        Ok(())
    }
}

impl<T> Default for GrowSeq<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a GrowSeq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
