//! `bm-pq` — extrinsic min-priority queues.
//!
//! "Extrinsic" means the priority is supplied alongside the item rather than
//! derived from it, and may be changed while the item is queued.  This is the
//! decrease-key contract A* search relies on.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`queue`]  | `ExtrinsicMinPq` trait                                       |
//! | [`heap`]   | `ArrayHeapMinPq` — indexed binary heap, O(log n) operations  |
//! | [`naive`]  | `NaiveMinPq` — linear-scan reference implementation          |
//!
//! # Tie-breaking
//!
//! Both implementations order entries by `(priority, insertion sequence)`:
//! among equal priorities the item added first is returned first, and
//! `change_priority` keeps the item's original sequence number.  Priorities
//! compare with [`f64::total_cmp`].

pub mod heap;
pub mod naive;
pub mod queue;


pub use heap::ArrayHeapMinPq;
pub use naive::NaiveMinPq;
pub use queue::ExtrinsicMinPq;
