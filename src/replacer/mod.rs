//! Replacer Module
//!
//! Provides eviction-order tracking: the policy contract and the
//! least-recently-used engine implementing it.

mod list;
mod lru;
mod policy;
mod stats;


// Re-export public types
pub use lru::LruReplacer;
pub use policy::Replacer;
pub use stats::ReplacerStats;
