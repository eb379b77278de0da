//! Error types for recently-used lists.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors raised by a [`RecentlyUsedList`](crate::RecentlyUsedList).
///
/// Every variant is a caller contract violation. A call that returns one of
/// these leaves the list exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A construction argument was rejected (e.g. `nonpositive capacity: 0`).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An absent element was offered to `try_push`.
    #[error("null element")]
    NullElement,

    /// Index was negative or not less than the current size.
    ///
    /// Both cases are reported through this single variant. `index` is wide
    /// enough to hold any `usize` as well as any negative `i64`.
    #[error("index {index} out of range for list of size {size}")]
    IndexOutOfRange { index: i128, size: usize },

    /// An internal invariant did not hold.
    ///
    /// Only produced by `check_invariants`; this indicates a bug.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl Error {
    /// Build the error for a rejected capacity.
    pub(crate) fn nonpositive_capacity(capacity: impl std::fmt::Display) -> Self {
        Error::InvalidArgument(format!("nonpositive capacity: {}", capacity))
    }
}
