//! The async iteration protocol and its two entry points, `aiter` and `anext`.
//!
//! Every combinator in this crate consumes [`AsyncIterable`]s and produces
//! [`AsyncIterator`]s, so outputs can always be fed back in as inputs.

use crate::error::{Next, Stop};
use log::trace;
use std::future::Future;

/// A value that can be advanced asynchronously.
pub trait AsyncIterator {
    /// Element type
    type Item;
    /// Failure type of the source
    type Error;

    /// Produce the next element, or signal exhaustion or failure.
    fn advance(&mut self) -> impl Future<Output = Next<Self::Item, Self::Error>>;

    /// Convert failures into another error type.
    ///
    /// Mostly useful to line up an infallible source with a fallible one
    /// before zipping them: `acount(0, 1).map_err(|never| -> MyError { match never {} })`.
    fn map_err<F, E2>(self, f: F) -> MapErr<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Error) -> E2,
    {
        MapErr { inner: self, f }
    }
}

/// A value that resolves asynchronously to an [`AsyncIterator`].
pub trait AsyncIterable {
    /// Element type
    type Item;
    /// Failure type of both initialization and advancing
    type Error;
    /// The iterator this resolves to
    type IntoAiter: AsyncIterator<Item = Self::Item, Error = Self::Error>;

    /// Resolve into an iterator.
    fn into_aiter(self) -> impl Future<Output = Result<Self::IntoAiter, Self::Error>>;
}

impl<I: AsyncIterator> AsyncIterable for I {
    type Item = I::Item;
    type Error = I::Error;
    type IntoAiter = I;

    async fn into_aiter(self) -> Result<I, I::Error> {
        Ok(self)
    }
}

impl<I: AsyncIterator> AsyncIterator for &mut I {
    type Item = I::Item;
    type Error = I::Error;

    fn advance(&mut self) -> impl Future<Output = Next<Self::Item, Self::Error>> {
        (**self).advance()
    }
}

/// The async version of the builtin `iter`.
#[inline]
pub async fn aiter<I: AsyncIterable>(iterable: I) -> Result<I::IntoAiter, I::Error> {
    iterable.into_aiter().await
}

/// The async version of the builtin `next`.
///
/// `None` means no default was supplied: exhaustion is passed back to the
/// caller. With `Some(value)` exhaustion is absorbed and `value` returned.
pub async fn anext<I: AsyncIterator>(
    iterator: &mut I,
    default: Option<I::Item>,
) -> Next<I::Item, I::Error> {
    match iterator.advance().await {
        Err(Stop::Exhausted) => match default {
            Some(value) => Ok(value),
            None => {
                trace!("anext: iterator exhausted, no default supplied");
                Err(Stop::Exhausted)
            }
        },
        other => other,
    }
}

/// [`anext`] with a supplied default; only failures remain.
pub async fn anext_or<I: AsyncIterator>(
    iterator: &mut I,
    default: I::Item,
) -> Result<I::Item, I::Error> {
    match iterator.advance().await {
        Ok(value) => Ok(value),
        Err(Stop::Exhausted) => Ok(default),
        Err(Stop::Failed(e)) => Err(e),
    }
}

/// Adapter returned by [`AsyncIterator::map_err`].
#[derive(Debug, Clone)]
pub struct MapErr<I, F> {
    inner: I,
    f: F,
}

impl<I, F, E2> AsyncIterator for MapErr<I, F>
where
    I: AsyncIterator,
    F: FnMut(I::Error) -> E2,
{
    type Item = I::Item;
    type Error = E2;

    async fn advance(&mut self) -> Next<I::Item, E2> {
        let step = self.inner.advance().await;
        step.map_err(|stop| stop.map(&mut self.f))
    }
}
