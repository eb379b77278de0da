//! recently-used-list - A bounded list of distinct elements ordered by recency.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                   RecentlyUsedList<T>                   │
//! ├─────────────────────────────────────────────────────────┤
//! │  push(x) ─► dedup ─► insert at head ─► evict tail       │
//! │                                        (if len > cap)   │
//! │  ┌───────────────────────────────────────────────────┐  │
//! │  │  VecDeque<T>:  head ... tail        (len <= cap)  │  │
//! │  └───────────────────────────────────────────────────┘  │
//! │  RecencyStats: pushes, promotions, head hits,           │
//! │                insertions, evictions, clears            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Error, config)
//! - [`list`] - The list itself and its statistics
//!
//! # Quick Start
//! ```
//! use recently_used_list::RecentlyUsedList;
//!
//! let mut recent = RecentlyUsedList::new(3).unwrap();
//! recent.push("main.rs");
//! recent.push("lib.rs");
//! recent.push("main.rs");
//!
//! assert_eq!(recent.element_at(0).unwrap(), &"main.rs");
//! assert_eq!(recent.len(), 2);
//! ```

pub mod common;
pub mod list;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_CAPACITY, MIN_CAPACITY};
pub use common::{Error, Result};

pub use list::{RecentlyUsedList, StatsSnapshot};
