// Adapters layer: concrete port implementations. The memory store is
// the reference backend; the cache wraps any other store.

pub mod cache;
pub mod memory;

pub use cache::CachedStore;
pub use memory::MemoryStore;
