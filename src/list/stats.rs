//! Push and eviction statistics.

use std::fmt;

/// Counters tracked by a recently-used list.
///
/// Plain integers: the list is mutated through `&mut self` only, so there is
/// never a concurrent writer to guard against.
///
/// Statistics are not part of a list's identity. Two lists holding the same
/// elements compare equal no matter how they got there.
#[derive(Debug, Clone, Default)]
pub(crate) struct RecencyStats {
    /// Number of accepted pushes.
    pushes: u64,

    /// Pushes of an element already present below the head.
    promotions: u64,

    /// Pushes of the element already at the head.
    head_hits: u64,

    /// Pushes of an element that was not present.
    insertions: u64,

    /// Number of tail elements dropped to stay within capacity.
    evictions: u64,

    /// Number of `clear()` calls.
    clears: u64,
}

impl RecencyStats {
    /// Create a tracker with all counters at zero.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_head_hit(&mut self) {
        self.pushes += 1;
        self.head_hits += 1;
    }

    pub(crate) fn record_promotion(&mut self) {
        self.pushes += 1;
        self.promotions += 1;
    }

    pub(crate) fn record_insertion(&mut self) {
        self.pushes += 1;
        self.insertions += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub(crate) fn record_clear(&mut self) {
        self.clears += 1;
    }

    /// Get a snapshot of current statistics.
    pub(crate) fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            pushes: self.pushes,
            promotions: self.promotions,
            head_hits: self.head_hits,
            insertions: self.insertions,
            evictions: self.evictions,
            clears: self.clears,
        }
    }

    /// Reset all counters to zero.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A point-in-time copy of a list's push counters.
///
/// # Example
/// ```
/// use recently_used_list::RecentlyUsedList;
///
/// let mut list = RecentlyUsedList::new(2).unwrap();
/// list.push("a");
/// list.push("b");
/// list.push("a");
/// list.push("c");
///
/// let stats = list.stats();
/// assert_eq!(stats.pushes, 4);
/// assert_eq!(stats.promotions, 1);
/// assert_eq!(stats.evictions, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub pushes: u64,
    pub promotions: u64,
    pub head_hits: u64,
    pub insertions: u64,
    pub evictions: u64,
    pub clears: u64,
}

impl StatsSnapshot {
    /// Pushes that found their element already present.
    pub fn hits(&self) -> u64 {
        self.promotions + self.head_hits
    }

    /// Fraction of pushes that found their element already present (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.pushes == 0 {
            0.0
        } else {
            self.hits() as f64 / self.pushes as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ pushes: {}, hits: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.pushes,
            self.hits(),
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
