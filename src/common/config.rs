//! Configuration constants for recently-used lists.

/// Smallest capacity a list may be constructed with.
///
/// A list that can hold nothing has no head to report, so zero (and, for the
/// signed constructor, anything negative) is rejected.
pub const MIN_CAPACITY: usize = 1;

/// Capacity used by `RecentlyUsedList::default()`.
pub const DEFAULT_CAPACITY: usize = 10;

/// Prefix of the printable form: `RecentlyUsedList[a, b, c]`.
pub const DISPLAY_PREFIX: &str = "RecentlyUsedList";
