//! Replacer Statistics Module
//!
//! Counters describing how the replacer has been used: how many tokens
//! entered tracking, how often already-tracked tokens were promoted, and
//! how tracking ended (eviction or explicit removal).

use serde::Serialize;

// == Replacer Stats ==
/// Usage counters for a replacer instance.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReplacerStats {
    /// Record calls that started tracking a previously unknown token.
    pub inserts: u64,
    /// Record calls that re-promoted an already-tracked token.
    pub promotions: u64,
    /// Victims handed out by eviction.
    pub evictions: u64,
    /// Tokens dropped by explicit removal.
    pub removals: u64,
    /// Evictions on an empty replacer plus removals of untracked tokens.
    pub misses: u64,
    /// Tokens currently tracked.
    pub tracked: usize,
}

impl ReplacerStats {
    /// Creates a zeroed statistics block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of record calls that hit an already-tracked token.
    ///
    /// Returns 0.0 when nothing has been recorded yet.
    pub fn reuse_rate(&self) -> f64 {
        let records = self.inserts + self.promotions;
        if records == 0 {
            return 0.0;
        }
        self.promotions as f64 / records as f64
    }

    /// Counts a record call that began tracking a new token.
    pub fn record_insert(&mut self) {
        self.inserts += 1;
    }

    /// Counts a record call that promoted a tracked token.
    pub fn record_promotion(&mut self) {
        self.promotions += 1;
    }

    /// Counts a successful eviction.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Counts a successful explicit removal.
    pub fn record_removal(&mut self) {
        self.removals += 1;
    }

    /// Counts an operation that found nothing to act on.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Updates the tracked-token gauge.
    pub fn set_tracked(&mut self, count: usize) {
        self.tracked = count;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new_is_zeroed() {
        let stats = ReplacerStats::new();
        assert_eq!(stats.inserts, 0);
        assert_eq!(stats.promotions, 0);
        assert_eq!(stats.evictions, 0);
        assert_eq!(stats.removals, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.tracked, 0);
    }

    #[test]
    fn test_reuse_rate_with_no_records() {
        let stats = ReplacerStats::new();
        assert_eq!(stats.reuse_rate(), 0.0);
    }

    #[test]
    fn test_reuse_rate_mixed() {
        let mut stats = ReplacerStats::new();
        stats.record_insert();
        stats.record_insert();
        stats.record_insert();
        stats.record_promotion();
        // 1 promotion out of 4 record calls.
        assert!((stats.reuse_rate() - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_counters_accumulate_independently() {
        let mut stats = ReplacerStats::new();
        stats.record_insert();
        stats.record_promotion();
        stats.record_eviction();
        stats.record_removal();
        stats.record_miss();
        stats.record_miss();

        assert_eq!(stats.inserts, 1);
        assert_eq!(stats.promotions, 1);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.removals, 1);
        assert_eq!(stats.misses, 2);
    }

    #[test]
    fn test_set_tracked_overwrites_gauge() {
        let mut stats = ReplacerStats::new();
        stats.set_tracked(12);
        assert_eq!(stats.tracked, 12);
        stats.set_tracked(3);
        assert_eq!(stats.tracked, 3);
    }

    #[test]
    fn test_stats_serialize_to_json() {
        let mut stats = ReplacerStats::new();
        stats.record_insert();
        stats.set_tracked(1);

        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"inserts\":1"));
        assert!(json.contains("\"tracked\":1"));
    }
}
