use std::fmt::Debug;

use crate::{Error, Result};

/// Array-backed binary min-heap of `(priority, vertex)` pairs
///
/// The heap has no decrease-key: shortest path algorithms push a fresh entry
/// whenever a distance improves and discard stale entries when they surface.
/// Entries with equal priority come out in an order fixed by the heap shape only.
#[derive(Debug, Clone)]
pub struct MinHeap<P, V>
where
    P: Ord + Copy + Debug,
    V: Copy + Debug,
{
    /// Implicit binary tree: children of `i` live at `2i + 1` and `2i + 2`
    heap: Vec<(P, V)>,
}

impl<P, V> Default for MinHeap<P, V>
where
    P: Ord + Copy + Debug,
    V: Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P, V> MinHeap<P, V>
where
    P: Ord + Copy + Debug,
    V: Copy + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinHeap { heap: Vec::new() }
    }

    /// Creates an empty priority queue with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of elements in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Inserts `vertex` with `priority`, sifting it up towards the root
    pub fn insert(&mut self, priority: P, vertex: V) {
        self.heap.push((priority, vertex));
        self.sift_up(self.heap.len() - 1);
    }

    /// Removes and returns the entry with the smallest priority
    pub fn extract_min(&mut self) -> Result<(P, V)> {
        if self.heap.is_empty() {
            return Err(Error::InvalidState("extract_min called on an empty heap"));
        }

        let min = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Returns the entry with the smallest priority without removing it
    pub fn peek(&self) -> Option<(P, V)> {
        self.heap.first().copied()
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].0 >= self.heap[parent].0 {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;

            let mut smallest = index;
            if left < len && self.heap[left].0 < self.heap[smallest].0 {
                smallest = left;
            }
            if right < len && self.heap[right].0 < self.heap[smallest].0 {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.heap.swap(index, smallest);
            index = smallest;
        }
    }

    #[cfg(test)]
    fn satisfies_heap_property(&self) -> bool {
        (1..self.heap.len()).all(|i| self.heap[(i - 1) / 2].0 <= self.heap[i].0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_empty_heap_fails() {
        let mut heap: MinHeap<u32, usize> = MinHeap::new();
        assert!(heap.is_empty());
        assert!(matches!(heap.extract_min(), Err(Error::InvalidState(_))));
    }

    #[test]
    fn test_extracts_in_priority_order() {
        let mut heap = MinHeap::new();
        for (priority, vertex) in [(5u32, 0usize), (1, 1), (8, 2), (3, 3), (1, 4), (0, 5)] {
            heap.insert(priority, vertex);
            assert!(heap.satisfies_heap_property());
        }
        assert_eq!(heap.len(), 6);
        assert_eq!(heap.peek(), Some((0, 5)));

        let mut priorities = Vec::new();
        while !heap.is_empty() {
            let (priority, _) = heap.extract_min().unwrap();
            assert!(heap.satisfies_heap_property());
            priorities.push(priority);
        }
        assert_eq!(priorities, vec![0, 1, 1, 3, 5, 8]);
    }

    #[test]
    fn test_interleaved_insert_and_extract() {
        let mut heap = MinHeap::with_capacity(4);
        heap.insert(10u64, 'a');
        heap.insert(4, 'b');
        assert_eq!(heap.extract_min().unwrap(), (4, 'b'));
        heap.insert(2, 'c');
        heap.insert(7, 'd');
        assert_eq!(heap.extract_min().unwrap(), (2, 'c'));
        assert_eq!(heap.extract_min().unwrap(), (7, 'd'));
        assert_eq!(heap.extract_min().unwrap(), (10, 'a'));
        assert!(heap.peek().is_none());
    }

    #[test]
    fn test_clear_empties_heap() {
        let mut heap = MinHeap::new();
        heap.insert(1u8, 0usize);
        heap.clear();
        assert_eq!(heap.len(), 0);
    }
}
