pub mod ghost_list;
pub mod order_list;
pub mod recency_list;
pub mod resident_set;
pub mod slot_arena;

pub use ghost_list::GhostList;
pub use order_list::OrderList;
pub use recency_list::RecencyList;
pub use resident_set::ResidentRecencySet;
pub use slot_arena::{SlotArena, SlotId};
