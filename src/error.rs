//! Error types for the arcsim library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when controller configuration parameters are
//!   invalid (zero cache size, zero ghost capacity).
//! - [`InvariantError`]: Returned when internal state-machine invariants are
//!   violated (`check_invariants` probes).
//!
//! The state machine is closed over valid inputs, so these two kinds cover
//! everything: configuration errors surface once at construction time, and
//! invariant errors signal a bug in the transition logic rather than bad
//! input. Empty-list evictions inside the access protocol are guarded by
//! the protocol itself and abort with a fatal assertion instead of
//! returning an error.
//!
//! ## Example Usage
//!
//! ```
//! use arcsim::error::ConfigError;
//! use arcsim::policy::arc::ArcCache;
//!
//! // Fallible constructor for user-configurable parameters
//! let cache: Result<ArcCache<u64>, ConfigError> = ArcCache::try_new(100, None);
//! assert!(cache.is_ok());
//!
//! // Zero cache size is caught without panicking
//! let bad = ArcCache::<u64>::try_new(0, None);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when controller configuration parameters are invalid.
///
/// Produced by [`ArcCache::try_new`](crate::policy::arc::ArcCache::try_new)
/// and [`ArcBuilder::try_build`](crate::builder::ArcBuilder::try_build).
/// Carries a human-readable description of which parameter failed
/// validation.
///
/// # Example
///
/// ```
/// use arcsim::policy::arc::ArcCache;
///
/// let err = ArcCache::<u64>::try_new(0, None).unwrap_err();
/// assert!(err.to_string().contains("cache_size"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal controller invariants are violated.
///
/// Produced by [`ArcCache::check_invariants`](crate::policy::arc::ArcCache::check_invariants).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
