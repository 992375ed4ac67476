//! Interop between async iterators and `futures` streams.

use crate::error::{Next, Stop};
use crate::protocol::AsyncIterator;
use futures::stream::{self, Stream, StreamExt, TryStream, TryStreamExt};
use std::convert::Infallible;

// ============================================================================
// StreamIter - Stream as an infallible async iterator
// ============================================================================

/// An [`AsyncIterator`] over the items of a [`Stream`].
///
/// The stream ending is the exhaustion signal.
#[derive(Debug)]
pub struct StreamIter<S> {
    stream: S,
}

/// Adapt any `Unpin` stream.
#[inline]
#[must_use]
pub fn from_stream<S>(stream: S) -> StreamIter<S>
where
    S: Stream + Unpin,
{
    StreamIter { stream }
}

impl<S> StreamIter<S> {
    /// Unwrap the underlying stream.
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S> AsyncIterator for StreamIter<S>
where
    S: Stream + Unpin,
{
    type Item = S::Item;
    type Error = Infallible;

    async fn advance(&mut self) -> Next<S::Item, Infallible> {
        self.stream.next().await.ok_or(Stop::Exhausted)
    }
}

// ============================================================================
// TryStreamIter - fallible stream as an async iterator
// ============================================================================

/// An [`AsyncIterator`] over a stream of `Result`s.
///
/// `Err` items surface as [`Stop::Failed`]; the stream may keep producing
/// after a failure, and the iterator keeps forwarding it.
#[derive(Debug)]
pub struct TryStreamIter<S> {
    stream: S,
}

/// Adapt any `Unpin` stream of `Result`s.
#[inline]
#[must_use]
pub fn try_from_stream<S>(stream: S) -> TryStreamIter<S>
where
    S: TryStream + Unpin,
{
    TryStreamIter { stream }
}

impl<S> AsyncIterator for TryStreamIter<S>
where
    S: TryStream + Unpin,
{
    type Item = S::Ok;
    type Error = S::Error;

    async fn advance(&mut self) -> Next<S::Ok, S::Error> {
        match self.stream.try_next().await {
            Ok(Some(item)) => Ok(item),
            Ok(None) => Err(Stop::Exhausted),
            Err(e) => Err(Stop::Failed(e)),
        }
    }
}

// ============================================================================
// into_stream - async iterator as a Stream
// ============================================================================

/// Drive an async iterator as a [`Stream`] of `Result`s.
///
/// The stream ends on exhaustion, and right after yielding the first failure.
pub fn into_stream<I>(iterator: I) -> impl Stream<Item = Result<I::Item, I::Error>>
where
    I: AsyncIterator,
{
    stream::unfold(Some(iterator), |state| async move {
        let mut iterator = state?;
        match iterator.advance().await {
            Ok(item) => Some((Ok(item), Some(iterator))),
            Err(Stop::Exhausted) => None,
            Err(Stop::Failed(e)) => Some((Err(e), None)),
        }
    })
}
