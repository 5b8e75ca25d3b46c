//! LRU Replacer - eviction-order tracking for buffer pool managers
//!
//! Provides a pluggable eviction-policy contract and a thread-safe
//! least-recently-used implementation of it.

pub mod config;
pub mod ids;
pub mod replacer;

pub use config::Config;
pub use ids::PageId;
pub use replacer::{LruReplacer, Replacer, ReplacerStats};
