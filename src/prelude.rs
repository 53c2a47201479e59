pub use crate::builder::ArcBuilder;
pub use crate::ds::{GhostList, OrderList, RecencyList, ResidentRecencySet, SlotArena, SlotId};
pub use crate::error::{ConfigError, InvariantError};
pub use crate::policy::ArcCache;
#[cfg(feature = "concurrency")]
pub use crate::policy::ConcurrentArcCache;
pub use crate::request::{CacheLine, OpKind, Req};
pub use crate::traits::{AccessOutcome, PolicyInspect, ReplacementPolicy};
