//! Admission-ordered resident set with consume-on-hit (ARC T1).
//!
//! T1 holds ids seen exactly once since admission. Two disciplines compose
//! here, each behind its own named operation:
//!
//! - admission order governs eviction (`admit` / `evict_oldest`): FIFO,
//!   reusing the [`GhostList`] ordering primitive — a T1 entry's position
//!   is fixed at admission and never refreshed;
//! - a hit departs the set (`consume_on_hit`): ARC always promotes a T1
//!   hit into T2, so the entry leaves T1 rather than moving within it.
//!
//! Keeping the two behaviors behind separately named operations makes the
//! pairing an explicit contract; there is no single `access` whose meaning
//! depends on which discipline wins.

use std::hash::Hash;

use crate::ds::ghost_list::GhostList;

/// Resident set in admission (FIFO) order whose entries leave on a hit.
#[derive(Debug)]
pub struct ResidentRecencySet<K> {
    inner: GhostList<K>,
}

impl<K> ResidentRecencySet<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates a resident set holding at most `capacity` ids.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: GhostList::new(capacity),
        }
    }

    /// Returns the configured capacity.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns the number of resident ids.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `true` if `id` is resident here.
    pub fn has(&self, id: &K) -> bool {
        self.inner.has(id)
    }

    /// Admits `id` at the newest end; if this exceeds capacity, evicts and
    /// returns the admission-oldest id (destined for B1).
    pub fn admit(&mut self, id: K) -> Option<K> {
        self.inner.append(id)
    }

    /// Removes `id` on a hit and returns it, for promotion into T2.
    /// Returns `None` if `id` is absent; the caller's `has` guard is
    /// expected to make that unreachable.
    pub fn consume_on_hit(&mut self, id: &K) -> Option<K> {
        self.inner.consume(id)
    }

    /// Removes and returns the admission-oldest id, or `None` if empty.
    /// Used by the replace subroutine when T1 must shrink without a hit.
    pub fn evict_oldest(&mut self) -> Option<K> {
        self.inner.evict_oldest()
    }

    /// Iterates ids from newest to oldest admission.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.inner.iter()
    }

    /// Drops all resident ids.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.inner.debug_validate_invariants();
    }
}
