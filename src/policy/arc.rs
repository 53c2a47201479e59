//! Adaptive Replacement Cache (ARC) simulator core.
//!
//! Implements the ARC policy state machine over four ordered lists and a
//! self-tuning target parameter, reproducing hit/miss decisions for a
//! stream of request ids without storing object data.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │                        ArcCache<K> Layout                          │
//! │                                                                    │
//! │   T1 (resident, seen once)          T2 (resident, seen twice+)     │
//! │   ┌────────────────────────┐        ┌────────────────────────┐     │
//! │   │ newest          oldest │        │ MRU                LRU │     │
//! │   │  [5] ◄──► [4] ◄──► [3] │        │  [9] ◄──► [8] ◄──► [7] │     │
//! │   │ admission order, hit   │        │ recency order, hit     │     │
//! │   │ departs (→ T2)         │        │ refreshes in place     │     │
//! │   └───────────┬────────────┘        └───────────┬────────────┘     │
//! │               │ evict                           │ evict            │
//! │               ▼                                 ▼                  │
//! │   B1 (ghost: ids only)              B2 (ghost: ids only)           │
//! │   ┌────────────────────────┐        ┌────────────────────────┐     │
//! │   │ hit ⇒ p grows          │        │ hit ⇒ p shrinks        │     │
//! │   └────────────────────────┘        └────────────────────────┘     │
//! │                                                                    │
//! │   p ∈ [0, c]: target size for T1, tuned by ghost-hit direction     │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Access protocol (one atomic transition per request id `x`)
//!
//! ```text
//!   Case 1  x ∈ T1 ∪ T2 ──► resident hit
//!           T1 hit: consume from T1, insert at T2 MRU
//!           T2 hit: refresh to T2 MRU
//!
//!   Case 2  x ∈ B1 ──► ghost hit (still a miss)
//!           p = min(p + λ, c); consume from B1; replace; insert at T2 MRU
//!
//!   Case 3  x ∈ B2 ──► ghost hit (still a miss)
//!           p = max(p − λ, 0); consume from B2; replace; insert at T2 MRU
//!
//!   Case 4  cold miss
//!           4A  |T1|+|B1| == c:
//!                 |T1| < c: drop oldest of B1, replace
//!                 |T1| == c (B1 empty): drop oldest of T1 outright
//!           4B  |T1|+|B1| < c and four-list total ≥ c:
//!                 total == 2c: drop oldest of B2 first
//!                 replace
//!           then admit x into T1; a T1 overflow victim demotes to B1
//!
//!   replace (frees one resident slot):
//!           if |T1| > 0 and (|T1| > p or (x ∈ B2 and |T1| == p)):
//!               evict oldest of T1 → B1
//!           else if |T2| > 0:
//!               evict LRU of T2 → B2
//! ```
//!
//! The tie-break reads B2 membership as observed at the start of the
//! access, before consumption.
//!
//! ## Operations
//!
//! | Operation          | Time | Notes                                    |
//! |--------------------|------|------------------------------------------|
//! | `access`           | O(1) | Amortized; sole mutating entry point     |
//! | `contains`         | O(1) | Resident membership, side-effect free    |
//! | `ghost_contains`   | O(1) | Ghost membership, side-effect free       |
//! | `t1_len`..`b2_len` | O(1) | Occupancy counters                       |
//! | `clear`            | O(n) | Resets all four lists and `p`            |
//!
//! ## Invariants (hold after every access)
//!
//! - an id resides in at most one of {T1, T2, B1, B2};
//! - `|T1| + |T2| ≤ c` and the four-list total never exceeds `2c`;
//! - `|B1|`, `|B2|` within their ghost capacities; `0 ≤ p ≤ c`.
//!
//! ## Example Usage
//!
//! ```
//! use arcsim::policy::arc::ArcCache;
//!
//! let mut cache: ArcCache<u64> = ArcCache::try_new(4, None).unwrap();
//!
//! // Cold misses admit into T1
//! assert!(cache.access(1).is_miss());
//! assert!(cache.access(2).is_miss());
//! assert_eq!(cache.t1_len(), 2);
//!
//! // A repeat access is a hit and promotes into T2
//! assert!(cache.access(1).is_hit());
//! assert_eq!(cache.t1_len(), 1);
//! assert_eq!(cache.t2_len(), 1);
//! ```
//!
//! ## Thread Safety
//!
//! [`ArcCache`] is a single logical state machine and is not thread-safe.
//! [`ConcurrentArcCache`] (feature `concurrency`) serializes every call —
//! membership probes included — through one mutex, since a probe answered
//! outside the mutation order would race.
//!
//! ## References
//!
//! - Megiddo & Modha, "ARC: A Self-Tuning, Low Overhead Replacement
//!   Cache", FAST 2003. The paper sizes each ghost list at `c`; this
//!   implementation parameterizes ghost capacity and defaults to `c / 2`.

use std::hash::Hash;

use crate::ds::{GhostList, RecencyList, ResidentRecencySet};
use crate::error::{ConfigError, InvariantError};
use crate::request::Req;
use crate::traits::{AccessOutcome, PolicyInspect, ReplacementPolicy};

/// ARC controller: four lists plus the adaptive target `p`.
///
/// Holds request ids only; object data never enters the core. Entries are
/// counted as unit-weight slots.
///
/// # Type Parameters
///
/// - `K`: request id type, `Clone + Eq + Hash`
///
/// # Example
///
/// ```
/// use arcsim::policy::arc::ArcCache;
///
/// // cache_size 100, ghost capacity defaulting to 50 per list
/// let cache: ArcCache<u64> = ArcCache::try_new(100, None).unwrap();
/// assert_eq!(cache.capacity(), 100);
/// assert_eq!(cache.b1_capacity(), 50);
/// assert_eq!(cache.p_value(), 0);
/// ```
#[derive(Debug)]
pub struct ArcCache<K>
where
    K: Clone + Eq + Hash,
{
    /// Resident ids seen once since admission, in admission order.
    t1: ResidentRecencySet<K>,
    /// Resident ids seen at least twice, in recency order.
    t2: RecencyList<K>,
    /// Ghost ids evicted from T1.
    b1: GhostList<K>,
    /// Ghost ids evicted from T2.
    b2: GhostList<K>,
    /// Adaptive target size for T1, in `[0, capacity]`.
    p: usize,
    /// Increment applied to `p` per ghost hit.
    lambda: usize,
    /// Maximum resident entries (|T1| + |T2|).
    capacity: usize,
}

impl<K> ArcCache<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates a controller with the given cache size and an optional ghost
    /// capacity applied to both B1 and B2.
    ///
    /// `ghost_capacity` defaults to `cache_size / 2`; pass
    /// `Some(cache_size)` for paper-exact ARC history. Fails with
    /// [`ConfigError`] if `cache_size` is 0 or an explicit ghost capacity
    /// is 0.
    pub fn try_new(cache_size: usize, ghost_capacity: Option<usize>) -> Result<Self, ConfigError> {
        if cache_size == 0 {
            return Err(ConfigError::new("cache_size must be > 0"));
        }
        if ghost_capacity == Some(0) {
            return Err(ConfigError::new("ghost_capacity must be > 0 when supplied"));
        }
        let ghost = ghost_capacity.unwrap_or(cache_size / 2);
        Ok(Self::from_parts(cache_size, ghost, ghost, 1))
    }

    /// Starts a builder for a controller with `cache_size` resident slots.
    ///
    /// ```
    /// use arcsim::policy::arc::ArcCache;
    ///
    /// let cache: ArcCache<u64> = ArcCache::<u64>::builder(8)
    ///     .ghost_capacity(8)
    ///     .lambda(2)
    ///     .try_build()
    ///     .unwrap();
    /// assert_eq!(cache.b2_capacity(), 8);
    /// ```
    pub fn builder(cache_size: usize) -> crate::builder::ArcBuilder {
        crate::builder::ArcBuilder::new(cache_size)
    }

    /// Construction after validation; used by `try_new` and the builder.
    pub(crate) fn from_parts(
        capacity: usize,
        b1_capacity: usize,
        b2_capacity: usize,
        lambda: usize,
    ) -> Self {
        Self {
            t1: ResidentRecencySet::new(capacity),
            t2: RecencyList::new(capacity),
            b1: GhostList::new(b1_capacity),
            b2: GhostList::new(b2_capacity),
            p: 0,
            lambda,
            capacity,
        }
    }

    /// Processes one request id and reports hit or miss. Ghost hits tune
    /// `p` but report [`AccessOutcome::Miss`].
    pub fn access(&mut self, id: K) -> AccessOutcome {
        // Case 1: resident hit. A T1 hit always departs T1 for T2; residents
        // cannot exceed capacity here since T1 shrinks as T2 grows.
        if self.t1.has(&id) {
            let hit = self
                .t1
                .consume_on_hit(&id)
                .expect("T1 membership was checked; consume cannot miss");
            self.t2.touch_or_insert(hit);
            return AccessOutcome::Hit;
        }
        if self.t2.has(&id) {
            self.t2.touch_or_insert(id);
            return AccessOutcome::Hit;
        }

        // Ghost membership is captured once, before consumption; the
        // replace tie-break reads B2 membership as of the start of the
        // access.
        let in_b1 = self.b1.has(&id);
        let in_b2 = self.b2.has(&id);

        if in_b1 {
            // Case 2: B1 ghost hit means T1 was too small; grow its target.
            self.p = (self.p + self.lambda).min(self.capacity);
            self.b1
                .consume(&id)
                .expect("B1 membership was checked; consume cannot miss");
            self.replace(in_b2);
            self.t2.touch_or_insert(id);
            return AccessOutcome::Miss;
        }
        if in_b2 {
            // Case 3: B2 ghost hit means T2 was too small; shrink T1's target.
            self.p = self.p.saturating_sub(self.lambda);
            self.b2
                .consume(&id)
                .expect("B2 membership was checked; consume cannot miss");
            self.replace(in_b2);
            self.t2.touch_or_insert(id);
            return AccessOutcome::Miss;
        }

        // Case 4: cold miss.
        let t1_b1 = self.t1.len() + self.b1.len();
        if t1_b1 == self.capacity {
            // Case 4A: the once-seen side has exhausted its budget.
            if self.t1.len() < self.capacity {
                let _ = self
                    .b1
                    .evict_oldest()
                    .expect("|T1| < c and |T1| + |B1| == c leave B1 non-empty");
                self.replace(false);
            } else {
                // B1 is empty and T1 is full: drop the oldest resident
                // outright, there is no ghost budget left to remember it.
                let _ = self
                    .t1
                    .evict_oldest()
                    .expect("|T1| == c > 0 leaves T1 non-empty");
            }
        } else if t1_b1 < self.capacity {
            // Case 4B: bound the combined history at 2c before admitting.
            let total = t1_b1 + self.t2.len() + self.b2.len();
            if total >= self.capacity {
                if total == 2 * self.capacity {
                    let _ = self
                        .b2
                        .evict_oldest()
                        .expect("total of 2c with |T1| + |B1| < c leaves B2 non-empty");
                }
                self.replace(false);
            }
        }

        if let Some(victim) = self.t1.admit(id) {
            // A B1 overflow, if any, falls off the oldest end and is
            // forgotten for good; ghost lists have no further tier.
            let _ = self.b1.append(victim);
        }
        AccessOutcome::Miss
    }

    /// Processes one trace request; only the id is consumed.
    pub fn access_request(&mut self, req: &Req<K>) -> AccessOutcome {
        self.access(req.item_id().clone())
    }

    /// Frees exactly one resident slot, demoting the victim into the
    /// matching ghost list.
    ///
    /// `in_b2` is the tie-break input: whether the id being accessed was
    /// observed in B2 at the start of the access. At `|T1| == p` exactly, a
    /// B2 ghost hit shrinks T1 one further step so it does not stall at the
    /// target while B2 pressure persists.
    fn replace(&mut self, in_b2: bool) {
        let t1_len = self.t1.len();
        if t1_len > 0 && (t1_len > self.p || (in_b2 && t1_len == self.p)) {
            let victim = self.t1.evict_oldest().expect("guarded by |T1| > 0");
            let _ = self.b1.append(victim);
        } else if !self.t2.is_empty() {
            let victim = self.t2.evict_lru().expect("guarded by |T2| > 0");
            let _ = self.b2.append(victim);
        }
    }

    /// Returns `true` if `id` currently occupies a resident slot.
    pub fn contains(&self, id: &K) -> bool {
        self.t1.has(id) || self.t2.has(id)
    }

    /// Returns `true` if `id` is remembered in a ghost list.
    pub fn ghost_contains(&self, id: &K) -> bool {
        self.b1.has(id) || self.b2.has(id)
    }

    /// Returns the number of resident entries (|T1| + |T2|).
    pub fn len(&self) -> usize {
        self.t1.len() + self.t2.len()
    }

    /// Returns `true` if no entries are resident.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of resident entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of entries in T1 (seen once).
    pub fn t1_len(&self) -> usize {
        self.t1.len()
    }

    /// Returns the number of entries in T2 (seen at least twice).
    pub fn t2_len(&self) -> usize {
        self.t2.len()
    }

    /// Returns the number of ids remembered in B1.
    pub fn b1_len(&self) -> usize {
        self.b1.len()
    }

    /// Returns the number of ids remembered in B2.
    pub fn b2_len(&self) -> usize {
        self.b2.len()
    }

    /// Returns B1's ghost capacity.
    pub fn b1_capacity(&self) -> usize {
        self.b1.capacity()
    }

    /// Returns B2's ghost capacity.
    pub fn b2_capacity(&self) -> usize {
        self.b2.capacity()
    }

    /// Returns the adaptive target size for T1.
    pub fn p_value(&self) -> usize {
        self.p
    }

    /// Returns the `p` increment applied per ghost hit.
    pub fn lambda(&self) -> usize {
        self.lambda
    }

    /// Drops all resident and remembered state and resets `p` to 0.
    pub fn clear(&mut self) {
        self.t1.clear();
        self.t2.clear();
        self.b1.clear();
        self.b2.clear();
        self.p = 0;
    }

    /// Verifies the controller's invariants, returning the first violation.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.t1.len() + self.t2.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "resident lists exceed capacity: |T1| {} + |T2| {} > {}",
                self.t1.len(),
                self.t2.len(),
                self.capacity
            )));
        }
        if self.b1.len() > self.b1.capacity() {
            return Err(InvariantError::new("B1 exceeds its ghost capacity"));
        }
        if self.b2.len() > self.b2.capacity() {
            return Err(InvariantError::new("B2 exceeds its ghost capacity"));
        }
        if self.p > self.capacity {
            return Err(InvariantError::new(format!(
                "p {} out of range [0, {}]",
                self.p, self.capacity
            )));
        }
        let total = self.t1.len() + self.t2.len() + self.b1.len() + self.b2.len();
        if total > 2 * self.capacity {
            return Err(InvariantError::new(format!(
                "four-list total {} exceeds 2c = {}",
                total,
                2 * self.capacity
            )));
        }

        // Disjointness: an id lives in at most one list at a time.
        let mut seen = rustc_hash::FxHashSet::default();
        for id in self
            .t1
            .iter()
            .chain(self.t2.iter())
            .chain(self.b1.iter())
            .chain(self.b2.iter())
        {
            if !seen.insert(id) {
                return Err(InvariantError::new("id present in more than one list"));
            }
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    /// Panics if any controller or per-list invariant is violated.
    pub fn debug_validate_invariants(&self) {
        self.t1.debug_validate_invariants();
        self.t2.debug_validate_invariants();
        self.b1.debug_validate_invariants();
        self.b2.debug_validate_invariants();
        if let Err(err) = self.check_invariants() {
            panic!("ARC invariant violated: {}", err);
        }
    }
}

impl<K> PolicyInspect<K> for ArcCache<K>
where
    K: Clone + Eq + Hash,
{
    fn contains(&self, id: &K) -> bool {
        ArcCache::contains(self, id)
    }

    fn len(&self) -> usize {
        ArcCache::len(self)
    }

    fn capacity(&self) -> usize {
        ArcCache::capacity(self)
    }
}

impl<K> ReplacementPolicy<K> for ArcCache<K>
where
    K: Clone + Eq + Hash,
{
    fn access(&mut self, id: K) -> AccessOutcome {
        ArcCache::access(self, id)
    }

    fn clear(&mut self) {
        ArcCache::clear(self)
    }
}

// ---------------------------------------------------------------------------
// ConcurrentArcCache
// ---------------------------------------------------------------------------

/// Mutex-serialized wrapper around [`ArcCache`].
///
/// The four lists plus `p` form one critical section: every call, including
/// read-only probes, takes the same lock so no probe can observe state
/// outside the total mutation order.
#[cfg(feature = "concurrency")]
#[derive(Debug)]
pub struct ConcurrentArcCache<K>
where
    K: Clone + Eq + Hash,
{
    inner: parking_lot::Mutex<ArcCache<K>>,
}

#[cfg(feature = "concurrency")]
impl<K> ConcurrentArcCache<K>
where
    K: Clone + Eq + Hash,
{
    /// Creates a serialized controller; parameters as [`ArcCache::try_new`].
    pub fn try_new(cache_size: usize, ghost_capacity: Option<usize>) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: parking_lot::Mutex::new(ArcCache::try_new(cache_size, ghost_capacity)?),
        })
    }

    /// Processes one request id under the lock.
    pub fn access(&self, id: K) -> AccessOutcome {
        self.inner.lock().access(id)
    }

    /// Processes one trace request under the lock.
    pub fn access_request(&self, req: &Req<K>) -> AccessOutcome {
        self.inner.lock().access_request(req)
    }

    /// Resident membership, answered inside the serialization boundary.
    pub fn contains(&self, id: &K) -> bool {
        self.inner.lock().contains(id)
    }

    /// Returns the number of resident entries.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if no entries are resident.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Returns the maximum number of resident entries.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Returns the adaptive target size for T1.
    pub fn p_value(&self) -> usize {
        self.inner.lock().p_value()
    }

    /// Drops all state under the lock.
    pub fn clear(&self) {
        self.inner.lock().clear()
    }

    /// Runs `f` against the controller inside one critical section, for
    /// multi-step inspection that must not interleave with accesses.
    pub fn with_cache<R>(&self, f: impl FnOnce(&mut ArcCache<K>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn arc(cache_size: usize) -> ArcCache<u64> {
        ArcCache::try_new(cache_size, None).unwrap()
    }

    #[test]
    fn arc_new_constructs_empty() {
        let cache = arc(100);
        assert_eq!(cache.capacity(), 100);
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
        assert_eq!(cache.t1_len(), 0);
        assert_eq!(cache.t2_len(), 0);
        assert_eq!(cache.b1_len(), 0);
        assert_eq!(cache.b2_len(), 0);
        assert_eq!(cache.p_value(), 0);
        assert_eq!(cache.lambda(), 1);
        // Ghost capacity defaults to cache_size / 2
        assert_eq!(cache.b1_capacity(), 50);
        assert_eq!(cache.b2_capacity(), 50);
    }

    #[test]
    fn arc_rejects_invalid_config() {
        assert!(ArcCache::<u64>::try_new(0, None).is_err());
        assert!(ArcCache::<u64>::try_new(4, Some(0)).is_err());
        assert!(ArcCache::<u64>::try_new(4, Some(4)).is_ok());
    }

    #[test]
    fn arc_cold_misses_fill_t1_in_admission_order() {
        let mut cache = arc(4);
        for id in 0..4 {
            assert!(cache.access(id).is_miss());
            cache.debug_validate_invariants();
        }
        assert_eq!(cache.t1_len(), 4);
        assert_eq!(cache.t2_len(), 0);
        assert_eq!(cache.p_value(), 0);
        for id in 0..4 {
            assert!(cache.contains(&id));
        }
    }

    #[test]
    fn arc_t1_hit_promotes_to_t2() {
        let mut cache = arc(4);
        for id in 0..4 {
            cache.access(id);
        }

        assert!(cache.access(3).is_hit());
        assert_eq!(cache.t1_len(), 3);
        assert_eq!(cache.t2_len(), 1);
        assert!(cache.t2.has(&3));
        assert!(!cache.t1.has(&3));

        // A second hit refreshes in T2, T1 untouched
        assert!(cache.access(3).is_hit());
        assert_eq!(cache.t1_len(), 3);
        assert_eq!(cache.t2_len(), 1);
        cache.debug_validate_invariants();
    }

    #[test]
    fn arc_t1_evictions_demote_to_b1_in_fifo_order() {
        let mut cache = arc(4);
        for id in 0..4 {
            cache.access(id);
        }
        cache.access(3); // promote 3 into T2

        // Three new cold misses push T1 entries through B1
        for id in 4..7 {
            assert!(cache.access(id).is_miss());
            cache.debug_validate_invariants();
        }
        assert_eq!(cache.t1_len() + cache.t2_len(), 4);
        assert!(cache.b1_len() >= 1);
        // 0, 1 and 2 were demoted in FIFO order; the Case-4A pruning that
        // precedes each replace dropped the older ghosts, leaving only the
        // latest demotion remembered.
        let b1: Vec<_> = cache.b1.iter().copied().collect();
        assert_eq!(b1, vec![2]);
    }

    #[test]
    fn arc_b1_ghost_hit_grows_p_and_promotes_to_t2() {
        let mut cache = arc(4);
        for id in 0..4 {
            cache.access(id);
        }
        cache.access(3);
        for id in 4..7 {
            cache.access(id);
        }
        // State: T1 = {4,5,6}, T2 = {3}, B1 = [2], p = 0
        let p_before = cache.p_value();
        let t1_before = cache.t1_len();

        assert!(cache.access(2).is_miss()); // ghost hit is still a miss
        cache.debug_validate_invariants();

        assert_eq!(cache.p_value(), p_before + 1);
        assert!(cache.t2.has(&2));
        assert!(!cache.b1.has(&2));
        // |T1| > p held before the mutation, so replace shrank T1
        assert_eq!(cache.t1_len(), t1_before - 1);
    }

    #[test]
    fn arc_b2_ghost_hit_shrinks_p_clamped_at_zero() {
        let mut cache = arc(4);
        // Promote everything into T2, then force T2 evictions into B2
        for id in 0..4 {
            cache.access(id);
        }
        for id in 0..4 {
            cache.access(id);
        }
        cache.access(4); // T1 empty ⇒ replace evicts T2 LRU (0) into B2
        assert!(cache.b2.has(&0));

        assert!(cache.access(0).is_miss());
        assert_eq!(cache.p_value(), 0); // 0 − λ clamps at 0
        assert!(cache.t2.has(&0));
        cache.debug_validate_invariants();

        // Many consecutive B2 hits never drive p negative
        for round in 0..8 {
            cache.access(100 + round); // churn residents through the lists
            cache.debug_validate_invariants();
            assert!(cache.p_value() <= cache.capacity());
        }
    }

    #[test]
    fn arc_replace_tiebreak_favors_t1_on_b2_hit_at_boundary() {
        let mut cache = ArcCache::<u64>::builder(4)
            .ghost_capacity(4)
            .try_build()
            .unwrap();
        for id in 0..4 {
            cache.access(id);
        }
        for id in 0..3 {
            cache.access(id); // T2 = {0,1,2}, T1 = [3]
        }
        cache.access(4); // evicts 3 → B1, T1 = [4]
        cache.access(5); // evicts 4 → B1, T1 = [5]
        cache.access(3); // B1 hit: p = 1, T2 LRU (0) → B2
        cache.access(4); // B1 hit: p = 2, T2 LRU (1) → B2
        assert_eq!(cache.p_value(), 2);
        assert_eq!(cache.t1_len(), 1);
        assert!(cache.b2.has(&0));

        // B2 hit: p drops to 1 == |T1|; the tie-break evicts from T1, not T2.
        let t2_before = cache.t2_len();
        assert!(cache.access(0).is_miss());
        assert_eq!(cache.p_value(), 1);
        assert_eq!(cache.t1_len(), 0);
        assert!(cache.b1.has(&5));
        assert_eq!(cache.t2_len(), t2_before + 1);
        cache.debug_validate_invariants();
    }

    #[test]
    fn arc_case_4a_discards_outright_when_b1_is_exhausted() {
        // Ghost capacity 1 keeps Case 4A's both branches reachable quickly.
        let mut cache = ArcCache::<u64>::builder(2)
            .ghost_capacity(1)
            .try_build()
            .unwrap();
        cache.access(0);
        cache.access(1); // T1 = [0,1]
        cache.access(2); // |T1|+|B1| = 2 = c, |T1| == c: 0 dropped outright
        cache.debug_validate_invariants();

        assert!(!cache.contains(&0));
        assert!(!cache.ghost_contains(&0));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn arc_case_4a_prunes_b1_before_replacing() {
        let mut cache = arc(4); // ghost capacity 2
        for id in 0..4 {
            cache.access(id);
        }
        cache.access(3);
        for id in 4..7 {
            cache.access(id);
        }
        // T1 = {4,5,6}, B1 = [2]: |T1| + |B1| == c, so this miss takes the
        // 4A path that prunes B1's oldest ghost before replacing.
        let b1_before = cache.b1_len();
        assert!(cache.access(7).is_miss());
        cache.debug_validate_invariants();
        assert!(cache.b1_len() <= b1_before + 1);
        assert_eq!(cache.len(), cache.capacity());
    }

    #[test]
    fn arc_capacity_one() {
        let mut cache = arc(1);
        // Default ghost capacity is 1/2 == 0: ghosts stay inert
        assert_eq!(cache.b1_capacity(), 0);

        assert!(cache.access(1).is_miss());
        assert!(cache.access(1).is_hit());
        assert!(cache.access(2).is_miss());
        assert!(cache.access(1).is_miss()); // evicted and forgotten
        cache.debug_validate_invariants();
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.b1_len(), 0);
        assert_eq!(cache.b2_len(), 0);
    }

    #[test]
    fn arc_ghost_tracking_after_demotion() {
        let mut cache = ArcCache::<u64>::builder(3)
            .ghost_capacity(3)
            .try_build()
            .unwrap();
        for id in 0..3 {
            cache.access(id);
        }
        cache.access(0);
        cache.access(1); // T2 = {0,1}, T1 = [2]

        // p = 0 and |T1| = 1 > 0: replace demotes T1's oldest into B1
        cache.access(3);
        assert!(cache.ghost_contains(&2));
        assert!(cache.b1.has(&2));
        cache.debug_validate_invariants();
    }

    #[test]
    fn arc_clear_resets_state() {
        let mut cache = arc(4);
        for id in 0..8 {
            cache.access(id);
        }
        cache.access(7);
        assert!(!cache.is_empty());

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.t1_len(), 0);
        assert_eq!(cache.t2_len(), 0);
        assert_eq!(cache.b1_len(), 0);
        assert_eq!(cache.b2_len(), 0);
        assert_eq!(cache.p_value(), 0);
        cache.debug_validate_invariants();
    }

    #[test]
    fn arc_access_request_consumes_only_the_id() {
        use crate::request::{OpKind, Req};

        let mut cache = arc(4);
        let req = Req::new(9u64).with_size(4096).with_op(OpKind::Read);
        assert!(cache.access_request(&req).is_miss());
        assert!(cache.access_request(&req).is_hit());
        assert_eq!(cache.len(), 1);
    }

    #[cfg(feature = "concurrency")]
    #[test]
    fn arc_concurrent_wrapper_serializes_accesses() {
        use std::sync::Arc;

        let cache = Arc::new(ConcurrentArcCache::try_new(64, None).unwrap());
        let handles: Vec<_> = (0..4u64)
            .map(|t| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    for i in 0..256u64 {
                        cache.access(t * 31 + i % 96);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert!(cache.len() <= cache.capacity());
        cache.with_cache(|inner| inner.debug_validate_invariants());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Invariants hold in every reachable state of a random trace.
            #[test]
            fn arc_invariants_hold_over_random_traces(
                cache_size in 1usize..=8,
                ghost in proptest::option::of(1usize..=8),
                trace in proptest::collection::vec(0u64..16, 1..200),
            ) {
                let mut cache = ArcCache::try_new(cache_size, ghost).unwrap();
                for id in trace {
                    cache.access(id);
                    cache.debug_validate_invariants();
                    prop_assert!(cache.len() <= cache.capacity());
                    prop_assert!(cache.p_value() <= cache.capacity());
                }
            }

            // Replaying a trace against a fresh controller is deterministic.
            #[test]
            fn arc_replay_is_deterministic(
                cache_size in 1usize..=8,
                trace in proptest::collection::vec(0u64..16, 1..200),
            ) {
                let mut first = ArcCache::try_new(cache_size, None).unwrap();
                let mut second = ArcCache::try_new(cache_size, None).unwrap();

                let outcomes_first: Vec<_> =
                    trace.iter().map(|id| first.access(*id)).collect();
                let outcomes_second: Vec<_> =
                    trace.iter().map(|id| second.access(*id)).collect();

                prop_assert_eq!(outcomes_first, outcomes_second);
                prop_assert_eq!(first.p_value(), second.p_value());
                prop_assert_eq!(first.t1_len(), second.t1_len());
                prop_assert_eq!(first.t2_len(), second.t2_len());
            }

            // Every id demoted out of residency is either remembered in a
            // ghost list or fully forgotten, never resident.
            #[test]
            fn arc_evicted_ids_leave_residency(
                trace in proptest::collection::vec(0u64..12, 1..150),
            ) {
                let mut cache: ArcCache<u64> = ArcCache::try_new(4, None).unwrap();
                for id in &trace {
                    cache.access(*id);
                }
                let resident = (0..12u64).filter(|id| cache.contains(id)).count();
                prop_assert_eq!(resident, cache.len());
                for id in 0..12u64 {
                    prop_assert!(!(cache.contains(&id) && cache.ghost_contains(&id)));
                }
            }
        }
    }
}
