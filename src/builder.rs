//! Builder for [`ArcCache`] configuration.
//!
//! Collects the knobs the plain constructor does not expose — per-list
//! ghost capacities and the `p` increment `lambda` — and validates them in
//! one place at `try_build`.
//!
//! ## Example Usage
//!
//! ```
//! use arcsim::builder::ArcBuilder;
//! use arcsim::policy::arc::ArcCache;
//!
//! // Paper-exact ARC: ghost capacity c for both lists
//! let cache: ArcCache<u64> = ArcBuilder::new(100)
//!     .ghost_capacity(100)
//!     .try_build()
//!     .unwrap();
//! assert_eq!(cache.b1_capacity(), 100);
//!
//! // Asymmetric history, coarser adaptation steps
//! let cache: ArcCache<u64> = ArcBuilder::new(100)
//!     .b1_capacity(100)
//!     .b2_capacity(25)
//!     .lambda(4)
//!     .try_build()
//!     .unwrap();
//! assert_eq!(cache.lambda(), 4);
//! ```

use std::hash::Hash;

use crate::error::ConfigError;
use crate::policy::arc::ArcCache;

/// Staged configuration for an [`ArcCache`].
#[derive(Debug, Clone)]
pub struct ArcBuilder {
    cache_size: usize,
    b1_capacity: Option<usize>,
    b2_capacity: Option<usize>,
    lambda: usize,
}

impl ArcBuilder {
    /// Starts a builder for a controller with `cache_size` resident slots.
    pub fn new(cache_size: usize) -> Self {
        Self {
            cache_size,
            b1_capacity: None,
            b2_capacity: None,
            lambda: 1,
        }
    }

    /// Sets both ghost-list capacities. Defaults to `cache_size / 2`; the
    /// original ARC paper uses `cache_size`.
    pub fn ghost_capacity(mut self, capacity: usize) -> Self {
        self.b1_capacity = Some(capacity);
        self.b2_capacity = Some(capacity);
        self
    }

    /// Sets B1's ghost capacity independently.
    pub fn b1_capacity(mut self, capacity: usize) -> Self {
        self.b1_capacity = Some(capacity);
        self
    }

    /// Sets B2's ghost capacity independently.
    pub fn b2_capacity(mut self, capacity: usize) -> Self {
        self.b2_capacity = Some(capacity);
        self
    }

    /// Sets the `p` increment per ghost hit (default 1). Callers modelling
    /// size-weighted adaptation set this to the object weight.
    pub fn lambda(mut self, lambda: usize) -> Self {
        self.lambda = lambda;
        self
    }

    /// Validates the configuration and builds the controller.
    pub fn try_build<K>(self) -> Result<ArcCache<K>, ConfigError>
    where
        K: Clone + Eq + Hash,
    {
        if self.cache_size == 0 {
            return Err(ConfigError::new("cache_size must be > 0"));
        }
        if self.b1_capacity == Some(0) || self.b2_capacity == Some(0) {
            return Err(ConfigError::new("ghost_capacity must be > 0 when supplied"));
        }
        if self.lambda == 0 {
            return Err(ConfigError::new("lambda must be > 0"));
        }
        let default_ghost = self.cache_size / 2;
        Ok(ArcCache::from_parts(
            self.cache_size,
            self.b1_capacity.unwrap_or(default_ghost),
            self.b2_capacity.unwrap_or(default_ghost),
            self.lambda,
        ))
    }
}
