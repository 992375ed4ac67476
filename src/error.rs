//! Termination signals for async iterators

use thiserror::Error;

/// Why an [`AsyncIterator`](crate::AsyncIterator) stopped producing values.
///
/// `Exhausted` is the expected end of a sequence and not an error in the
/// usual sense. `Failed` carries whatever the source raised, unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Stop<E> {
    /// The sequence has no more elements
    #[error("async iterator exhausted")]
    Exhausted,

    /// The source failed
    #[error("{0}")]
    Failed(E),
}

/// Result of a single advance
pub type Next<T, E> = Result<T, Stop<E>>;

impl<E> Stop<E> {
    /// Returns `true` for the end-of-sequence signal.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Stop::Exhausted)
    }

    /// The wrapped failure, if any.
    #[inline]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Stop::Exhausted => None,
            Stop::Failed(e) => Some(e),
        }
    }

    /// Map the failure, leaving exhaustion untouched.
    #[inline]
    pub fn map<E2, F>(self, f: F) -> Stop<E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Stop::Exhausted => Stop::Exhausted,
            Stop::Failed(e) => Stop::Failed(f(e)),
        }
    }
}
