//! Eviction Policy Module
//!
//! The capability contract shared by every eviction-order tracker.

// == Replacer Contract ==
/// Eviction-order tracking over opaque tokens.
///
/// A replacer observes token usage and, when asked, names the token that
/// should be evicted next. It never touches the resources the tokens
/// stand for; callers (typically a buffer pool manager) do that.
///
/// Every operation takes `&self` and is safe to call from any thread:
/// implementations synchronize internally, and each call takes effect
/// atomically with respect to the others. `Send + Sync` is part of the
/// contract so policies stay interchangeable behind `dyn Replacer<T>`.
///
/// Untracked tokens are not an error anywhere in this contract. Eviction
/// on an empty replacer yields `None` and removal of an unknown token
/// yields `false`; both leave the replacer unchanged.
pub trait Replacer<T>: Send + Sync {
    /// Marks `token` as just used, making it the least attractive
    /// eviction candidate. Starts tracking the token if it was unknown.
    fn record_use(&self, token: T);

    /// Picks the best eviction candidate, stops tracking it, and returns
    /// it. Returns `None` when nothing is tracked.
    fn evict_victim(&self) -> Option<T>;

    /// Stops tracking `token` without treating it as evicted. Returns
    /// `false` if the token was not tracked.
    fn remove(&self, token: &T) -> bool;

    /// Number of tokens currently tracked.
    fn len(&self) -> usize;

    /// Returns true when no tokens are tracked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::collections::VecDeque;

    /// Minimal first-in/first-out policy: eviction order is insertion
    /// order, and re-recording a tracked token changes nothing.
    struct FifoReplacer {
        queue: Mutex<VecDeque<u32>>,
    }

    impl FifoReplacer {
        fn new() -> Self {
            Self {
                queue: Mutex::new(VecDeque::new()),
            }
        }
    }

    impl Replacer<u32> for FifoReplacer {
        fn record_use(&self, token: u32) {
            let mut queue = self.queue.lock();
            if !queue.contains(&token) {
                queue.push_back(token);
            }
        }

        fn evict_victim(&self) -> Option<u32> {
            self.queue.lock().pop_front()
        }

        fn remove(&self, token: &u32) -> bool {
            let mut queue = self.queue.lock();
            let before = queue.len();
            queue.retain(|t| t != token);
            queue.len() != before
        }

        fn len(&self) -> usize {
            self.queue.lock().len()
        }
    }

    #[test]
    fn test_fifo_satisfies_the_contract() {
        let replacer = FifoReplacer::new();
        replacer.record_use(1);
        replacer.record_use(2);
        replacer.record_use(3);

        assert_eq!(replacer.len(), 3);
        assert_eq!(replacer.evict_victim(), Some(1));
        assert!(replacer.remove(&3));
        assert!(!replacer.remove(&3));
        assert_eq!(replacer.evict_victim(), Some(2));
        assert_eq!(replacer.evict_victim(), None);
        assert!(replacer.is_empty());
    }

    #[test]
    fn test_fifo_ignores_repromotion() {
        let replacer = FifoReplacer::new();
        replacer.record_use(1);
        replacer.record_use(2);
        replacer.record_use(1);

        // Unlike an LRU policy, insertion order still decides.
        assert_eq!(replacer.evict_victim(), Some(1));
        assert_eq!(replacer.evict_victim(), Some(2));
    }

    #[test]
    fn test_contract_is_object_safe() {
        let replacer: Box<dyn Replacer<u32>> = Box::new(FifoReplacer::new());
        replacer.record_use(5);
        assert_eq!(replacer.len(), 1);
        assert_eq!(replacer.evict_victim(), Some(5));
        assert!(replacer.is_empty());
    }
}
