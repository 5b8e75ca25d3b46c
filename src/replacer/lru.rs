//! LRU Replacer Module
//!
//! The least-recently-used eviction engine: a recency list and a token
//! index kept in bijection behind a single mutex.

use std::collections::HashMap;
use std::hash::Hash;

use parking_lot::Mutex;

use crate::replacer::{list::RecencyList, policy::Replacer, stats::ReplacerStats};

// == Engine State ==
/// Everything the lock guards.
///
/// `order` holds the recency sequence, `index` maps each tracked token to
/// its slot in that sequence. Every operation leaves the two describing
/// exactly the same token set.
#[derive(Debug)]
struct LruState<T> {
    /// Recency order, most recently used first
    order: RecencyList<T>,
    /// Token to slot index
    index: HashMap<T, usize>,
    /// Usage counters
    stats: ReplacerStats,
}

// == LRU Replacer ==
/// Thread-safe least-recently-used eviction tracker.
///
/// Records which token was used most recently and hands out the least
/// recently used one as the eviction victim. All operations run in O(1)
/// and take `&self`; a single internal mutex serializes them, so the
/// replacer can be shared across threads behind an `Arc` (it is
/// `Send + Sync` whenever `T: Send`).
///
/// Tokens are stored twice, once in the sequence and once in the index,
/// so they should be cheap to clone: identifiers, not payloads.
#[derive(Debug)]
pub struct LruReplacer<T> {
    state: Mutex<LruState<T>>,
}

impl<T: Clone + Eq + Hash> LruReplacer<T> {
    // == Constructor ==
    /// Creates an empty replacer.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty replacer with space reserved for `capacity`
    /// tracked tokens.
    ///
    /// # Arguments
    /// * `capacity` - Expected number of simultaneously tracked tokens
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: Mutex::new(LruState {
                order: RecencyList::with_capacity(capacity),
                index: HashMap::with_capacity(capacity),
                stats: ReplacerStats::new(),
            }),
        }
    }

    // == Record Use ==
    /// Marks `token` as just used.
    ///
    /// An already-tracked token moves to the most-recently-used position
    /// without disturbing the relative order of the others. An unknown
    /// token starts being tracked there. Recording is idempotent on the
    /// tracked set: the token is never duplicated.
    ///
    /// # Arguments
    /// * `token` - The token that was just used
    pub fn record_use(&self, token: T) {
        let mut state = self.state.lock();

        if let Some(slot) = state.index.get(&token).copied() {
            // Already tracked: promote in place, the index entry still
            // points at the same slot.
            state.order.move_to_front(slot);
            state.stats.record_promotion();
        } else {
            let slot = state.order.push_front(token.clone());
            state.index.insert(token, slot);
            state.stats.record_insert();
        }

        let tracked = state.order.len();
        state.stats.set_tracked(tracked);
        // Index and order must always describe the same token set.
        debug_assert_eq!(state.index.len(), state.order.len());
    }

    // == Evict Victim ==
    /// Picks the least recently used token, stops tracking it, and
    /// returns it.
    ///
    /// Returns `None` when nothing is tracked. An empty replacer is a
    /// normal condition, not an error.
    pub fn evict_victim(&self) -> Option<T> {
        let mut state = self.state.lock();

        let slot = match state.order.back() {
            Some(slot) => slot,
            None => {
                state.stats.record_miss();
                return None;
            }
        };

        let token = state.order.remove(slot);
        state.index.remove(&token);
        state.stats.record_eviction();

        let tracked = state.order.len();
        state.stats.set_tracked(tracked);
        debug_assert_eq!(state.index.len(), state.order.len());

        Some(token)
    }

    // == Remove ==
    /// Stops tracking `token` regardless of its position.
    ///
    /// Returns `false` if the token was not tracked; the replacer is left
    /// unchanged in that case.
    ///
    /// # Arguments
    /// * `token` - The token to stop tracking
    pub fn remove(&self, token: &T) -> bool {
        let mut state = self.state.lock();

        let slot = match state.index.remove(token) {
            Some(slot) => slot,
            None => {
                state.stats.record_miss();
                return false;
            }
        };

        state.order.remove(slot);
        state.stats.record_removal();

        let tracked = state.order.len();
        state.stats.set_tracked(tracked);
        debug_assert_eq!(state.index.len(), state.order.len());

        true
    }

    // == Peek Victim ==
    /// Returns a copy of the current eviction candidate without removing
    /// or promoting it.
    pub fn peek_victim(&self) -> Option<T> {
        let state = self.state.lock();
        state.order.peek_back().cloned()
    }

    // == Contains ==
    /// Returns true if `token` is currently tracked.
    ///
    /// Purely observational: the token is not promoted.
    pub fn contains(&self, token: &T) -> bool {
        self.state.lock().index.contains_key(token)
    }

    // == Length ==
    /// Returns the number of tokens currently tracked.
    pub fn len(&self) -> usize {
        self.state.lock().order.len()
    }

    // == Is Empty ==
    /// Returns true if no tokens are tracked.
    pub fn is_empty(&self) -> bool {
        self.state.lock().order.is_empty()
    }

    // == Clear ==
    /// Drops every tracked token at once.
    ///
    /// Cleared tokens count neither as evictions nor as removals; only
    /// the tracked gauge is reset.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.order.clear();
        state.index.clear();
        state.stats.set_tracked(0);
    }

    // == Tokens ==
    /// Returns a snapshot of the tracked tokens, most recently used
    /// first.
    pub fn tokens(&self) -> Vec<T> {
        let state = self.state.lock();
        state.order.iter().cloned().collect()
    }

    // == Stats ==
    /// Returns a snapshot of the usage counters.
    pub fn stats(&self) -> ReplacerStats {
        let state = self.state.lock();
        let mut stats = state.stats.clone();
        stats.set_tracked(state.order.len());
        stats
    }
}

impl<T: Clone + Eq + Hash> Default for LruReplacer<T> {
    fn default() -> Self {
        Self::new()
    }
}

// == Policy Contract ==
impl<T> Replacer<T> for LruReplacer<T>
where
    T: Clone + Eq + Hash + Send,
{
    fn record_use(&self, token: T) {
        LruReplacer::record_use(self, token);
    }

    fn evict_victim(&self) -> Option<T> {
        LruReplacer::evict_victim(self)
    }

    fn remove(&self, token: &T) -> bool {
        LruReplacer::remove(self, token)
    }

    fn len(&self) -> usize {
        LruReplacer::len(self)
    }

    fn is_empty(&self) -> bool {
        LruReplacer::is_empty(self)
    }
}
