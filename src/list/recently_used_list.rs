//! Bounded, duplicate-free list ordered by recency of use.
//!
//! # Layout
//! ```text
//!   head                                   tail
//!    │                                       │
//!    ▼                                       ▼
//! ┌──────┬──────┬──────┬─────────────┬──────────┐
//! │ e0   │ e1   │ e2   │     ...     │ e(n-1)   │   n <= capacity
//! └──────┴──────┴──────┴─────────────┴──────────┘
//!  most recent                        least recent (evicted first)
//! ```
//!
//! `push` removes any equal element, inserts at the head, then drops the
//! tail if the list grew past its capacity. Since an element already present
//! is removed before the insert, re-pushing never evicts.

use std::collections::VecDeque;
use std::fmt;
use std::hash::{Hash, Hasher};

use log::{debug, trace, warn};

use crate::common::config::{DEFAULT_CAPACITY, DISPLAY_PREFIX, MIN_CAPACITY};
use crate::common::{Error, Result};

use super::stats::{RecencyStats, StatsSnapshot};

/// A bounded list of distinct elements, most recently pushed first.
///
/// Identity is `(capacity, elements)`: [`PartialEq`], [`Hash`] and
/// [`Display`](fmt::Display) are all derived from those two fields and agree
/// with each other. Push statistics are carried alongside but never affect
/// identity.
///
/// # Concurrency
/// The list has no internal locking. Every mutating operation takes
/// `&mut self`, so sharing one list between threads requires the caller to
/// wrap it in a lock (e.g. `Mutex<RecentlyUsedList<T>>`). This is part of the
/// contract, not an implementation detail.
///
/// # Complexity
/// `push` and `contains` are O(len); everything else is O(1) except
/// `to_list`, which copies.
///
/// # Example
/// ```
/// use recently_used_list::RecentlyUsedList;
///
/// let mut list = RecentlyUsedList::new(3).unwrap();
/// for item in ["A", "B", "C", "D"] {
///     list.push(item);
/// }
/// assert_eq!(list.to_list(), vec!["D", "C", "B"]);
///
/// list.push("C");
/// assert_eq!(list.to_string(), "RecentlyUsedList[C, D, B]");
/// ```
#[derive(Clone)]
pub struct RecentlyUsedList<T> {
    /// Maximum number of elements; fixed at construction.
    capacity: usize,

    /// Front = head (most recent), back = tail (least recent).
    elements: VecDeque<T>,

    stats: RecencyStats,
}

impl<T> RecentlyUsedList<T> {
    /// Create an empty list holding at most `capacity` elements.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity < MIN_CAPACITY {
            return Err(Error::nonpositive_capacity(capacity));
        }

        debug!("created recently-used list with capacity {}", capacity);
        Ok(Self {
            capacity,
            elements: VecDeque::with_capacity(capacity.min(1024) + 1),
            stats: RecencyStats::new(),
        })
    }

    /// Create a list from a signed capacity.
    ///
    /// Negative and zero capacities are reported with their original value,
    /// e.g. `nonpositive capacity: -5`.
    ///
    /// # Example
    /// ```
    /// use recently_used_list::{Error, RecentlyUsedList};
    ///
    /// let err = RecentlyUsedList::<u32>::from_signed_capacity(-5).unwrap_err();
    /// assert!(matches!(err, Error::InvalidArgument(_)));
    /// assert!(err.to_string().contains("nonpositive capacity: -5"));
    /// ```
    pub fn from_signed_capacity(capacity: i64) -> Result<Self> {
        if capacity < MIN_CAPACITY as i64 {
            return Err(Error::nonpositive_capacity(capacity));
        }
        let capacity = usize::try_from(capacity).map_err(|_| {
            Error::InvalidArgument(format!("capacity too large: {}", capacity))
        })?;
        Self::new(capacity)
    }

    /// True iff the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Current number of elements (`0 ..= capacity`).
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// The fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        debug!("clearing {} element(s)", self.elements.len());
        self.elements.clear();
        self.stats.record_clear();
    }

    /// Element at `index`, counting from the head.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn element_at(&self, index: usize) -> Result<&T> {
        self.elements.get(index).ok_or(Error::IndexOutOfRange {
            index: index as i128,
            size: self.elements.len(),
        })
    }

    /// Signed form of [`element_at`](Self::element_at).
    ///
    /// Negative indices fail the same way as indices past the end.
    pub fn element_at_signed(&self, index: i64) -> Result<&T> {
        match usize::try_from(index) {
            Ok(index) => self.element_at(index),
            Err(_) => Err(Error::IndexOutOfRange {
                index: i128::from(index),
                size: self.elements.len(),
            }),
        }
    }

    /// Element at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// The most recently pushed element.
    #[inline]
    pub fn head(&self) -> Option<&T> {
        self.elements.front()
    }

    /// The least recently pushed element, next in line for eviction.
    #[inline]
    pub fn tail(&self) -> Option<&T> {
        self.elements.back()
    }

    /// Snapshot of the push counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Zero the push counters. Elements are untouched.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }
}

impl<T: PartialEq> RecentlyUsedList<T> {
    /// Push `item` to the head.
    ///
    /// If an equal element is already present it is moved rather than
    /// duplicated, and nothing is evicted. Otherwise, when the list is full,
    /// the tail is dropped and returned.
    ///
    /// Pushing the current head leaves the list unchanged.
    pub fn push(&mut self, item: T) -> Option<T> {
        match self.elements.iter().position(|e| *e == item) {
            Some(0) => {
                // Same position, fresh value: the head is replaced by an
                // equal element, so the sequence compares unchanged.
                self.elements[0] = item;
                self.stats.record_head_hit();
                None
            }
            Some(pos) => {
                trace!("promoting element from index {} to head", pos);
                self.elements.remove(pos);
                self.elements.push_front(item);
                self.stats.record_promotion();
                None
            }
            None => {
                self.elements.push_front(item);
                self.stats.record_insertion();

                if self.elements.len() > self.capacity {
                    debug!("evicting tail at capacity {}", self.capacity);
                    self.stats.record_eviction();
                    self.elements.pop_back()
                } else {
                    None
                }
            }
        }
    }

    /// Push an element that may be absent.
    ///
    /// `Some(item)` behaves exactly like [`push`](Self::push).
    ///
    /// # Errors
    /// [`Error::NullElement`] for `None`; the list and its counters are left
    /// unmodified.
    ///
    /// # Example
    /// ```
    /// use recently_used_list::{Error, RecentlyUsedList};
    ///
    /// let mut list = RecentlyUsedList::new(2).unwrap();
    /// list.push(1);
    /// assert_eq!(list.try_push(None), Err(Error::NullElement));
    /// assert_eq!(list.to_list(), vec![1]);
    /// ```
    pub fn try_push(&mut self, item: Option<T>) -> Result<Option<T>> {
        match item {
            Some(item) => Ok(self.push(item)),
            None => {
                warn!("rejected push of absent element");
                Err(Error::NullElement)
            }
        }
    }

    /// True if an element equal to `item` is present.
    pub fn contains(&self, item: &T) -> bool {
        self.elements.contains(item)
    }

    /// Verify capacity bounds and pairwise distinctness.
    ///
    /// O(len²); meant for tests, never called by the list itself.
    ///
    /// # Errors
    /// [`Error::InvariantViolation`] describing the first broken invariant.
    pub fn check_invariants(&self) -> Result<()> {
        if self.capacity < MIN_CAPACITY {
            return Err(Error::InvariantViolation(format!(
                "capacity {} below minimum {}",
                self.capacity, MIN_CAPACITY
            )));
        }
        if self.elements.len() > self.capacity {
            return Err(Error::InvariantViolation(format!(
                "length {} exceeds capacity {}",
                self.elements.len(),
                self.capacity
            )));
        }
        for (i, a) in self.elements.iter().enumerate() {
            if let Some(j) = self.elements.iter().skip(i + 1).position(|b| a == b) {
                return Err(Error::InvariantViolation(format!(
                    "elements at {} and {} are equal",
                    i,
                    i + 1 + j
                )));
            }
        }
        Ok(())
    }
}

impl<T: Clone> RecentlyUsedList<T> {
    /// Owned copy of the elements, head first.
    ///
    /// The returned `Vec` is detached from the list; changing it cannot
    /// change the list.
    pub fn to_list(&self) -> Vec<T> {
        self.elements.iter().cloned().collect()
    }
}

impl<T> Default for RecentlyUsedList<T> {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            elements: VecDeque::with_capacity(DEFAULT_CAPACITY + 1),
            stats: RecencyStats::new(),
        }
    }
}

impl<T: PartialEq> PartialEq for RecentlyUsedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity && self.elements == other.elements
    }
}

impl<T: Eq> Eq for RecentlyUsedList<T> {}

impl<T: Hash> Hash for RecentlyUsedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.capacity.hash(state);
        self.elements.hash(state);
    }
}

impl<T: fmt::Display> fmt::Display for RecentlyUsedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[", DISPLAY_PREFIX)?;
        for (i, e) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", e)?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for RecentlyUsedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecentlyUsedList")
            .field("capacity", &self.capacity)
            .field("elements", &self.elements)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn built_from<T: PartialEq>(
        capacity: usize,
        items: impl IntoIterator<Item = T>,
    ) -> RecentlyUsedList<T> {
        let mut list = RecentlyUsedList::new(capacity).unwrap();
        for item in items {
            list.push(item);
        }
        list
    }

    #[test]
    fn test_new_rejects_zero_capacity() {
        let err = RecentlyUsedList::<u32>::new(0).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument("nonpositive capacity: 0".to_string())
        );
    }

    #[test]
    fn test_from_signed_capacity() {
        assert!(RecentlyUsedList::<u32>::from_signed_capacity(-1).is_err());
        assert!(RecentlyUsedList::<u32>::from_signed_capacity(i64::MIN).is_err());

        let list = RecentlyUsedList::<u32>::from_signed_capacity(4).unwrap();
        assert_eq!(list.capacity(), 4);
    }

    #[test]
    fn test_new_list_is_empty() {
        let list = RecentlyUsedList::<u32>::new(5).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), 5);
        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
    }

    #[test]
    fn test_default_capacity() {
        let list = RecentlyUsedList::<u32>::default();
        assert_eq!(list.capacity(), DEFAULT_CAPACITY);
        assert!(list.is_empty());
    }

    #[test]
    fn test_push_orders_most_recent_first() {
        let list = built_from(3, ["A", "B", "C"]);
        assert_eq!(list.to_list(), vec!["C", "B", "A"]);
        assert_eq!(list.head(), Some(&"C"));
        assert_eq!(list.tail(), Some(&"A"));
    }

    #[test]
    fn test_push_evicts_tail_at_capacity() {
        let mut list = built_from(3, ["A", "B", "C"]);

        assert_eq!(list.push("D"), Some("A"));
        assert_eq!(list.to_list(), vec!["D", "C", "B"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_push_existing_moves_to_head_without_eviction() {
        let mut list = built_from(3, ["A", "B", "C"]);

        assert_eq!(list.push("A"), None);
        assert_eq!(list.to_list(), vec!["A", "C", "B"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_push_head_is_noop() {
        let mut list = built_from(3, ["A", "B"]);
        let before = list.clone();

        for _ in 0..5 {
            assert_eq!(list.push("B"), None);
        }

        assert_eq!(list, before);
        assert_eq!(list.stats().head_hits, 5);
    }

    #[test]
    fn test_capacity_one() {
        let mut list = RecentlyUsedList::new(1).unwrap();
        assert_eq!(list.push(1), None);
        assert_eq!(list.push(2), Some(1));
        assert_eq!(list.push(2), None);
        assert_eq!(list.to_list(), vec![2]);
    }

    #[test]
    fn test_try_push_none_leaves_list_unchanged() {
        let mut list = built_from(2, [1, 2]);
        let before = list.clone();
        let stats_before = list.stats();

        assert_eq!(list.try_push(None), Err(Error::NullElement));

        assert_eq!(list, before);
        assert_eq!(list.stats(), stats_before);
    }

    #[test]
    fn test_try_push_some_behaves_like_push() {
        let mut list = built_from(2, [1, 2]);
        assert_eq!(list.try_push(Some(3)), Ok(Some(1)));
        assert_eq!(list.to_list(), vec![3, 2]);
    }

    #[test]
    fn test_clear_preserves_capacity() {
        let mut list = built_from(4, [1, 2, 3]);

        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.capacity(), 4);
        assert_eq!(list.stats().clears, 1);
    }

    #[test]
    fn test_element_at_bounds() {
        let list = built_from(3, ["x", "y"]);

        assert_eq!(list.element_at(0), Ok(&"y"));
        assert_eq!(list.element_at(1), Ok(&"x"));
        assert_eq!(
            list.element_at(2),
            Err(Error::IndexOutOfRange { index: 2, size: 2 })
        );
        assert_eq!(
            list.element_at_signed(-1),
            Err(Error::IndexOutOfRange { index: -1, size: 2 })
        );
        assert_eq!(list.element_at_signed(1), Ok(&"x"));
        assert_eq!(list.get(5), None);
    }

    #[test]
    fn test_element_at_reports_huge_index_exactly() {
        let list = built_from(2, [1]);
        assert_eq!(
            list.element_at(usize::MAX),
            Err(Error::IndexOutOfRange {
                index: usize::MAX as i128,
                size: 1
            })
        );
        assert_eq!(
            list.element_at_signed(i64::MIN),
            Err(Error::IndexOutOfRange {
                index: i128::from(i64::MIN),
                size: 1
            })
        );
    }

    #[test]
    fn test_element_at_on_empty_list() {
        let list = RecentlyUsedList::<u8>::new(1).unwrap();
        assert!(matches!(
            list.element_at(0),
            Err(Error::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_to_list_is_detached() {
        let list = built_from(3, [1, 2]);

        let mut snapshot = list.to_list();
        snapshot.push(99);
        snapshot[0] = 42;

        assert_eq!(list.to_list(), vec![2, 1]);
    }

    #[test]
    fn test_empty_to_list() {
        let list = RecentlyUsedList::<String>::new(2).unwrap();
        assert!(list.to_list().is_empty());
        assert_eq!(list.to_string(), "RecentlyUsedList[]");
    }

    #[test]
    fn test_contains() {
        let list = built_from(2, [1, 2, 3]);
        assert!(list.contains(&3));
        assert!(list.contains(&2));
        assert!(!list.contains(&1));
    }

    #[test]
    fn test_equality_needs_same_capacity() {
        let a = built_from(3, [1, 2]);
        let b = built_from(4, [1, 2]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_ignores_history() {
        let a = built_from(3, [1, 2]);
        let b = built_from(3, [2, 1, 2]);
        let c = built_from(3, [1, 2, 2, 2]);

        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(hash_of(&a), hash_of(&c));
        assert_eq!(a.to_string(), c.to_string());
    }

    #[test]
    fn test_display() {
        let list = built_from(3, ["A", "B", "C", "D", "C"]);
        assert_eq!(list.to_string(), "RecentlyUsedList[C, D, B]");
    }

    #[test]
    fn test_debug_shows_capacity_and_elements() {
        let list = built_from(2, [7]);
        let dbg = format!("{:?}", list);
        assert!(dbg.contains("capacity: 2"));
        assert!(dbg.contains("[7]"));
    }

    #[test]
    fn test_stats_track_pushes() {
        let mut list = built_from(2, ["a", "b", "a", "a", "c"]);

        let stats = list.stats();
        assert_eq!(stats.pushes, 5);
        assert_eq!(stats.insertions, 3);
        assert_eq!(stats.promotions, 1);
        assert_eq!(stats.head_hits, 1);
        assert_eq!(stats.evictions, 1);

        list.reset_stats();
        assert_eq!(list.stats(), StatsSnapshot::default());
        assert_eq!(list.to_list(), vec!["c", "a"]);
    }

    #[test]
    fn test_check_invariants_holds() {
        let list = built_from(3, [5, 4, 5, 3, 2, 1]);
        assert_eq!(list.check_invariants(), Ok(()));
    }

    #[test]
    fn test_check_invariants_detects_duplicates() {
        let mut list = RecentlyUsedList::new(3).unwrap();
        list.elements.push_back(1);
        list.elements.push_back(1);

        assert!(matches!(
            list.check_invariants(),
            Err(Error::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_check_invariants_detects_overflow() {
        let mut list = RecentlyUsedList::new(1).unwrap();
        list.elements.push_back(1);
        list.elements.push_back(2);

        let err = list.check_invariants().unwrap_err();
        assert!(err.to_string().contains("exceeds capacity"));
    }
}
