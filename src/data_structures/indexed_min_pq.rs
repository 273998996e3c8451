use std::fmt::Debug;

use crate::{Error, Result};

/// An indexed binary min-heap for priority queue operations in shortest path algorithms
///
/// Every entry is identified by a caller-chosen index in `[0, capacity)`, so the key of
/// an entry already in the queue can be located and changed in O(log n) without a scan.
///
/// Three parallel arrays back the heap:
/// - `heap`: heap slot -> index
/// - `positions`: index -> heap slot (`None` when the index is absent)
/// - `keys`: index -> key (`None` when the index is absent)
#[derive(Debug, Clone)]
pub struct IndexMinPriorityQueue<K>
where
    K: PartialOrd + Copy + Debug,
{
    heap: Vec<usize>,
    positions: Vec<Option<usize>>,
    keys: Vec<Option<K>>,
}

/// Parent slot of a non-root heap slot
fn parent(slot: usize) -> usize {
    (slot - 1) / 2
}

fn left_child(slot: usize) -> usize {
    2 * slot + 1
}

impl<K> IndexMinPriorityQueue<K>
where
    K: PartialOrd + Copy + Debug,
{
    /// Creates an empty queue accepting indices in `[0, capacity)`
    pub fn new(capacity: usize) -> Self {
        IndexMinPriorityQueue {
            heap: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
            keys: vec![None; capacity],
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of indices in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Largest index (exclusive) the queue accepts
    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if `index` is currently in the queue
    pub fn contains_index(&self, index: usize) -> Result<bool> {
        self.check_index(index)?;
        Ok(self.positions[index].is_some())
    }

    /// Adds `index` with the given key
    pub fn insert(&mut self, index: usize, key: K) -> Result<()> {
        if self.contains_index(index)? {
            return Err(Error::DuplicateIndex(index));
        }

        let slot = self.heap.len();
        self.heap.push(index);
        self.positions[index] = Some(slot);
        self.keys[index] = Some(key);
        self.sift_up(slot);
        Ok(())
    }

    /// Index with the smallest key, without removing it
    pub fn min_index(&self) -> Result<usize> {
        self.heap.first().copied().ok_or(Error::EmptyQueue)
    }

    /// Smallest key in the queue
    pub fn min_key(&self) -> Result<K> {
        let index = self.min_index()?;
        self.key_of(index)
    }

    /// Key currently associated with `index`
    pub fn key_of(&self, index: usize) -> Result<K> {
        self.check_index(index)?;
        self.keys[index].ok_or(Error::IndexNotPresent(index))
    }

    /// Replaces the key of `index`, moving it up or down the heap as needed
    pub fn change_key(&mut self, index: usize, key: K) -> Result<()> {
        let slot = self.position_of(index)?;
        self.keys[index] = Some(key);
        self.sift_up(slot);
        self.sift_down(slot);
        Ok(())
    }

    /// Lowers the key of `index`. A key larger than the current one is rejected.
    pub fn decrease_key(&mut self, index: usize, key: K) -> Result<()> {
        let slot = self.position_of(index)?;
        if self.keys[index].map_or(false, |current| key > current) {
            return Err(Error::InvalidKeyChange { index });
        }
        self.keys[index] = Some(key);
        self.sift_up(slot);
        Ok(())
    }

    /// Raises the key of `index`. A key smaller than the current one is rejected.
    pub fn increase_key(&mut self, index: usize, key: K) -> Result<()> {
        let slot = self.position_of(index)?;
        if self.keys[index].map_or(false, |current| key < current) {
            return Err(Error::InvalidKeyChange { index });
        }
        self.keys[index] = Some(key);
        self.sift_down(slot);
        Ok(())
    }

    /// Removes the index with the smallest key and returns it
    pub fn delete_minimum(&mut self) -> Result<usize> {
        let min = self.min_index()?;
        self.remove_at(0);
        Ok(min)
    }

    /// Removes `index` from the queue regardless of its position
    pub fn delete(&mut self, index: usize) -> Result<()> {
        let slot = self.position_of(index)?;
        self.remove_at(slot);
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.capacity() {
            return Err(Error::IndexOutOfRange {
                index,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    fn position_of(&self, index: usize) -> Result<usize> {
        self.check_index(index)?;
        self.positions[index].ok_or(Error::IndexNotPresent(index))
    }

    /// Moves the last slot into `slot`, drops the removed index and restores heap order
    fn remove_at(&mut self, slot: usize) {
        let last = self.heap.len() - 1;
        self.swap(slot, last);
        if let Some(index) = self.heap.pop() {
            self.positions[index] = None;
            self.keys[index] = None;
        }
        if slot < self.heap.len() {
            self.sift_up(slot);
            self.sift_down(slot);
        }
    }

    /// Compares keys of two heap slots. Both slots hold present indices, so both keys are `Some`.
    fn greater(&self, a: usize, b: usize) -> bool {
        self.keys[self.heap[a]] > self.keys[self.heap[b]]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a]] = Some(a);
        self.positions[self.heap[b]] = Some(b);
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 && self.greater(parent(slot), slot) {
            self.swap(parent(slot), slot);
            slot = parent(slot);
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.heap.len();
        loop {
            let left = left_child(slot);
            if left >= len {
                break;
            }
            let mut child = left;
            if left + 1 < len && self.greater(left, left + 1) {
                child = left + 1;
            }
            if !self.greater(slot, child) {
                break;
            }
            self.swap(slot, child);
            slot = child;
        }
    }
}
