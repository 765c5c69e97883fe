//! The extrinsic min-priority-queue contract.

use std::cmp::Ordering;

/// Min-priority queue over distinct items with mutable priorities.
///
/// Misuse (adding a present item, changing the priority of an absent one) is
/// a caller bug and panics.  Removing or peeking from an empty queue returns
/// `None`.
pub trait ExtrinsicMinPq<T> {
    /// Insert `item` with `priority`.
    ///
    /// # Panics
    /// Panics if `item` is already present.
    fn add(&mut self, item: T, priority: f64);

    fn contains(&self, item: &T) -> bool;

    /// The item with the smallest priority, or `None` if empty.
    fn get_smallest(&self) -> Option<&T>;

    /// Remove and return the item with the smallest priority.
    fn remove_smallest(&mut self) -> Option<T>;

    /// Replace the priority of a queued item.  Works in both directions.
    ///
    /// # Panics
    /// Panics if `item` is not present.
    fn change_priority(&mut self, item: &T, priority: f64);

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Sort key shared by every implementation: priority, then insertion order.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Rank {
    pub priority: f64,
    pub seq:      u64,
}

impl PartialEq for Rank {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rank {}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.seq.cmp(&other.seq))
    }
}
