//! Linear-scan reference queue.
//!
//! Every operation except `add` is O(n).  Exists as an obviously-correct
//! oracle for [`ArrayHeapMinPq`](crate::ArrayHeapMinPq) and for tiny graphs
//! where a heap is not worth its bookkeeping.

use crate::queue::{ExtrinsicMinPq, Rank};

/// Unordered `Vec` of entries; the minimum is found by scanning.
pub struct NaiveMinPq<T> {
    items:    Vec<(T, Rank)>,
    next_seq: u64,
}

impl<T: PartialEq> NaiveMinPq<T> {
    pub fn new() -> Self {
        Self { items: Vec::new(), next_seq: 0 }
    }

    fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|(it, _)| it == item)
    }

    fn smallest_index(&self) -> Option<usize> {
        self.items
            .iter()
            .enumerate()
            .min_by(|(_, (_, a)), (_, (_, b))| a.cmp(b))
            .map(|(i, _)| i)
    }
}

impl<T: PartialEq> ExtrinsicMinPq<T> for NaiveMinPq<T> {
    fn add(&mut self, item: T, priority: f64) {
        assert!(self.position(&item).is_none(), "item is already present in the queue");
        let rank = Rank { priority, seq: self.next_seq };
        self.next_seq += 1;
        self.items.push((item, rank));
    }

    fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    fn get_smallest(&self) -> Option<&T> {
        self.smallest_index().map(|i| &self.items[i].0)
    }

    fn remove_smallest(&mut self) -> Option<T> {
        let i = self.smallest_index()?;
        Some(self.items.swap_remove(i).0)
    }

    fn change_priority(&mut self, item: &T, priority: f64) {
        let Some(i) = self.position(item) else {
            panic!("cannot change the priority of an item that is not in the queue");
        };
        self.items[i].1.priority = priority;
    }

    fn size(&self) -> usize {
        self.items.len()
    }
}

impl<T: PartialEq> Default for NaiveMinPq<T> {
    fn default() -> Self {
        Self::new()
    }
}
