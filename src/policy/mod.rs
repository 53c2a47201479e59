pub mod arc;

pub use arc::ArcCache;
#[cfg(feature = "concurrency")]
pub use arc::ConcurrentArcCache;
