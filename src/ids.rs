//! Identifier Module
//!
//! Token types used by storage-layer callers of the replacer.

use std::fmt;

use serde::Serialize;

// == Page Id ==
/// Identifier of a fixed-size page managed by a buffer pool.
///
/// This is the token type the demo workload feeds the replacer. The
/// replacer itself is generic; any cheap-to-clone hashable type works as
/// a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PageId(pub u64);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page-{}", self.0)
    }
}
