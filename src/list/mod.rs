//! The recently-used list and its statistics.
//!
//! # Components
//! - [`RecentlyUsedList`] - Bounded, duplicate-free, most-recent-first list
//! - [`StatsSnapshot`] - Push and eviction counters

mod recently_used_list;
mod stats;

pub use recently_used_list::RecentlyUsedList;
pub use stats::StatsSnapshot;
