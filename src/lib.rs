//! arcsim: Adaptive Replacement Cache (ARC) simulator core.
//!
//! Decides, for a stream of object-access requests, which ids are retained
//! in a bounded cache and which are evicted. The controller keeps two
//! resident lists (T1 recency, T2 frequency) and two ghost lists (B1, B2)
//! that remember recently evicted ids without their data, and self-tunes a
//! target split parameter `p` from ghost-list hits.
//!
//! See `DESIGN.md` for internal architecture and invariants.

pub mod builder;
pub mod ds;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod request;
pub mod traits;
