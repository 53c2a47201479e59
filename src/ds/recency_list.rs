//! Bounded most-recently-used list (ARC T2 primitive).
//!
//! Orders ids by most recent access, newest at the head. A hit refreshes
//! position in place — entries never leave T2 on a hit, which is the
//! structural difference from T1's consume-on-hit discipline. Backed by an
//! [`OrderList`] plus an `FxHashMap` index.
//!
//! ## Behavior
//! - `touch_or_insert(k)`: moves a present key to the newest end, or
//!   inserts it there. Never evicts.
//! - `insert_tracked(k)`: inserts at the newest end and reports the LRU
//!   eviction, if the insertion pushed the list over capacity.
//! - `evict_lru()`: removes and returns the least recently used id.
//!
//! All operations are O(1) average.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::order_list::OrderList;
use crate::ds::slot_arena::SlotId;

/// Capacity-bounded list of ids in recency order, most recent first.
#[derive(Debug)]
pub struct RecencyList<K> {
    list: OrderList<K>,
    index: FxHashMap<K, SlotId>,
    capacity: usize,
}

impl<K> RecencyList<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates a recency list holding at most `capacity` ids.
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

    /// Returns the number of ids currently held.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns `true` if `id` is present.
    pub fn has(&self, id: &K) -> bool {
        self.index.contains_key(id)
    }

    /// Moves `id` to the most-recently-used end, inserting it if absent.
    /// Never evicts; the caller is responsible for capacity.
    pub fn touch_or_insert(&mut self, id: K) {
        if let Some(&slot) = self.index.get(&id) {
            self.list.move_to_front(slot);
            return;
        }
        let slot = self.list.push_front(id.clone());
        self.index.insert(id, slot);
    }

    /// Inserts `id` at the most-recently-used end; if this pushes the list
    /// over capacity, evicts and returns the least recently used id.
    pub fn insert_tracked(&mut self, id: K) -> Option<K> {
        let slot = self.list.push_front(id.clone());
        self.index.insert(id, slot);
        if self.list.len() > self.capacity {
            self.evict_lru()
        } else {
            None
        }
    }

    /// Removes and returns the least recently used id, or `None` if empty.
    pub fn evict_lru(&mut self) -> Option<K> {
        let lru = self.list.pop_back()?;
        self.index.remove(&lru);
        Some(lru)
    }

    /// Iterates ids from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.list.iter()
    }

    /// Drops all held ids.
    pub fn clear(&mut self) {
        self.list.clear();
        self.index.clear();
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert_eq!(self.list.len(), self.index.len());
        self.list.debug_validate_invariants();
        for id in self.list.iter() {
            assert!(self.index.contains_key(id));
        }
    }
}
