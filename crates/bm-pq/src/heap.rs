//! Indexed binary min-heap.
//!
//! # Layout
//!
//! Entries live in a 0-based implicit binary heap (`children of i` are
//! `2i + 1` and `2i + 2`).  A side map records each item's current heap slot
//! so `contains` is O(1) and `change_priority` can locate the entry without a
//! scan, then restore heap order in O(log n).
//!
//! Every swap updates the side map, so `slots[heap[i].item] == i` holds after
//! each public operation.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::queue::{ExtrinsicMinPq, Rank};

struct Entry<T> {
    item: T,
    rank: Rank,
}

/// Array-backed min-priority queue with O(log n) decrease-key.
pub struct ArrayHeapMinPq<T> {
    heap:     Vec<Entry<T>>,
    slots:    FxHashMap<T, usize>,
    next_seq: u64,
}

impl<T: Clone + Eq + Hash> ArrayHeapMinPq<T> {
    pub fn new() -> Self {
        Self {
            heap:     Vec::new(),
            slots:    FxHashMap::default(),
            next_seq: 0,
        }
    }

    /// Pre-allocate for `n` simultaneously queued items.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            heap:     Vec::with_capacity(n),
            slots:    FxHashMap::with_capacity_and_hasher(n, Default::default()),
            next_seq: 0,
        }
    }

    /// Current priority of a queued item.
    pub fn priority(&self, item: &T) -> Option<f64> {
        self.slots.get(item).map(|&i| self.heap[i].rank.priority)
    }

    // ── Heap maintenance ──────────────────────────────────────────────────

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        if let Some(slot) = self.slots.get_mut(&self.heap[i].item) {
            *slot = i;
        }
        if let Some(slot) = self.slots.get_mut(&self.heap[j].item) {
            *slot = j;
        }
    }

    /// Move the entry at `i` toward the root; returns its final slot.
    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[i].rank < self.heap[parent].rank {
                self.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
        i
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < n && self.heap[left].rank < self.heap[smallest].rank {
                smallest = left;
            }
            if right < n && self.heap[right].rank < self.heap[smallest].rank {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<T: Clone + Eq + Hash> ExtrinsicMinPq<T> for ArrayHeapMinPq<T> {
    fn add(&mut self, item: T, priority: f64) {
        assert!(!self.slots.contains_key(&item), "item is already present in the queue");
        let rank = Rank { priority, seq: self.next_seq };
        self.next_seq += 1;

        let i = self.heap.len();
        self.slots.insert(item.clone(), i);
        self.heap.push(Entry { item, rank });
        self.sift_up(i);
    }

    fn contains(&self, item: &T) -> bool {
        self.slots.contains_key(item)
    }

    fn get_smallest(&self) -> Option<&T> {
        self.heap.first().map(|e| &e.item)
    }

    fn remove_smallest(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.slots.remove(&entry.item);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(entry.item)
    }

    fn change_priority(&mut self, item: &T, priority: f64) {
        let Some(&i) = self.slots.get(item) else {
            panic!("cannot change the priority of an item that is not in the queue");
        };
        self.heap[i].rank.priority = priority;
        let i = self.sift_up(i);
        self.sift_down(i);
    }

    fn size(&self) -> usize {
        self.heap.len()
    }
}

impl<T: Clone + Eq + Hash> Default for ArrayHeapMinPq<T> {
    fn default() -> Self {
        Self::new()
    }
}
