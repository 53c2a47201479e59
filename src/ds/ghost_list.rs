//! Bounded insertion-ordered id list (ARC ghost-list primitive).
//!
//! Remembers recently evicted ids without their data. Implements B1 and B2
//! directly, and serves as the admission-ordering primitive under
//! [`ResidentRecencySet`](crate::ds::resident_set::ResidentRecencySet) (T1).
//! Backed by an [`OrderList`] plus an `FxHashMap` index.
//!
//! ```text
//!   index: FxHashMap<K, SlotId>        list: OrderList<K>
//!   ┌─────────┬─────────┐             head ─► [C] ◄──► [B] ◄──► [A] ◄── tail
//!   │  key A  │  id_1   │                  newest              oldest
//!   │  key B  │  id_2   │
//!   └─────────┴─────────┘
//! ```
//!
//! ## Behavior
//! - `append(k)`: inserts at the newest end; on overflow evicts and returns
//!   the oldest id. Pure insertion order — appending never refreshes the
//!   position of a present key, and under ARC's disjointness invariant a
//!   present key is never re-appended.
//! - `consume(k)`: removes a present key immediately (ghost hit).
//! - `evict_oldest()`: removes and returns the oldest-inserted id.
//!
//! All operations are O(1) average.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::order_list::OrderList;
use crate::ds::slot_arena::SlotId;

/// Capacity-bounded list of ids in insertion order, newest first.
#[derive(Debug)]
pub struct GhostList<K> {
    list: OrderList<K>,
    index: FxHashMap<K, SlotId>,
    capacity: usize,
}

impl<K> GhostList<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates a ghost list holding at most `capacity` ids.
    pub fn new(capacity: usize) -> Self {
        Self {
            list: OrderList::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            capacity,
        }
    }

    /// Returns the configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of ids currently remembered.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if no ids are remembered.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns `true` if `id` is present.
    pub fn has(&self, id: &K) -> bool {
        self.index.contains_key(id)
    }

    /// Inserts `id` at the newest end; if this exceeds capacity, evicts and
    /// returns the oldest id. With capacity 0 the id is never stored and
    /// comes straight back.
    pub fn append(&mut self, id: K) -> Option<K> {
        if self.capacity == 0 {
            return Some(id);
        }
        let slot = self.list.push_front(id.clone());
        self.index.insert(id, slot);
        if self.list.len() > self.capacity {
            self.evict_oldest()
        } else {
            None
        }
    }

    /// Removes `id` immediately and returns it (ghost-hit consumption).
    /// Returns `None` if `id` is absent; the caller's `has` guard is
    /// expected to make that unreachable.
    pub fn consume(&mut self, id: &K) -> Option<K> {
        let slot = self.index.remove(id)?;
        self.list.remove(slot)
    }

    /// Removes and returns the oldest-inserted id, or `None` if empty.
    pub fn evict_oldest(&mut self) -> Option<K> {
        let oldest = self.list.pop_back()?;
        self.index.remove(&oldest);
        Some(oldest)
    }

    /// Iterates ids from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.list.iter()
    }

    /// Forgets all remembered ids.
    pub fn clear(&mut self) {
        self.list.clear();
        self.index.clear();
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert_eq!(self.list.len(), self.index.len());
        assert!(self.list.len() <= self.capacity);
        self.list.debug_validate_invariants();
        for id in self.list.iter() {
            assert!(self.index.contains_key(id));
        }
    }
}
