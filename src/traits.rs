//! # Replacement-policy trait surface
//!
//! Defines the call contract between the simulator core and its two
//! collaborators: a trace driver that feeds request ids, and a metrics
//! reader that consumes hit/miss outcomes and occupancy counters.
//!
//! ## Architecture
//!
//! ```text
//!   ┌───────────────────────────────────────────┐
//!   │            PolicyInspect<K>               │
//!   │                                           │
//!   │  contains(&, &K) → bool                   │
//!   │  len(&) → usize                           │
//!   │  is_empty(&) → bool                       │
//!   │  capacity(&) → usize                      │
//!   └────────────────────┬──────────────────────┘
//!                        │
//!                        ▼
//!   ┌───────────────────────────────────────────┐
//!   │          ReplacementPolicy<K>             │
//!   │                                           │
//!   │  access(&mut, K) → AccessOutcome          │
//!   │  clear(&mut)                              │
//!   └───────────────────────────────────────────┘
//! ```
//!
//! `PolicyInspect` is read-only and side-effect free; `access` is the sole
//! mutating entry point. A policy returns [`AccessOutcome::Hit`] only for
//! resident hits — a ghost hit tunes internal state but the object's data
//! was not retained, so it reports [`AccessOutcome::Miss`].

use std::hash::Hash;

/// Result of one access against a replacement policy.
///
/// Ghost hits (id remembered only in a ghost list) are cache misses.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum AccessOutcome {
    /// The id was resident; its data would have been served from cache.
    Hit,
    /// The id was not resident; its data would have been fetched.
    Miss,
}

impl AccessOutcome {
    /// Returns `true` for a resident hit.
    #[inline]
    pub fn is_hit(self) -> bool {
        matches!(self, AccessOutcome::Hit)
    }

    /// Returns `true` for a miss (cold or ghost).
    #[inline]
    pub fn is_miss(self) -> bool {
        matches!(self, AccessOutcome::Miss)
    }
}

/// Read-only occupancy queries every policy supports.
pub trait PolicyInspect<K>
where
    K: Clone + Eq + Hash,
{
    /// Returns `true` if `id` currently occupies a resident slot.
    fn contains(&self, id: &K) -> bool;

    /// Returns the number of resident entries.
    fn len(&self) -> usize;

    /// Returns `true` if no entries are resident.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of resident entries.
    fn capacity(&self) -> usize;
}

/// One-id-at-a-time replacement policy driven by a request stream.
///
/// Accesses must be delivered strictly in stream order; the correctness of
/// adaptive state depends on total ordering of mutations.
pub trait ReplacementPolicy<K>: PolicyInspect<K>
where
    K: Clone + Eq + Hash,
{
    /// Processes one request. Never fails under valid construction.
    fn access(&mut self, id: K) -> AccessOutcome;

    /// Drops all resident and remembered state.
    fn clear(&mut self);
}
