//! Lockstep zipping of several async iterables.

use crate::coroutine::{CoroutineIterator, Label};
use crate::error::Stop;
use crate::protocol::{AsyncIterable, AsyncIterator, aiter};
use futures::future::{join, join_all, try_join, try_join_all};
use std::fmt::Debug;

/// Zip two iterables into pairs.
///
/// Both iterators are resolved concurrently, and each advance polls both
/// sources concurrently. The zip ends as soon as either source stops; when
/// both stop on the same advance, `a`'s signal is reported.
pub fn azip<A, B>(
    a: A,
    b: B,
) -> impl AsyncIterator<Item = (A::Item, B::Item), Error = A::Error> + Debug
where
    A: AsyncIterable,
    B: AsyncIterable<Error = A::Error>,
{
    let factory = async |(a, b): (A, B)| -> Result<_, A::Error> {
        let (mut left, mut right) = try_join(aiter(a), aiter(b)).await?;
        Ok(async move || -> Result<(A::Item, B::Item), Stop<A::Error>> {
            let (x, y) = join(left.advance(), right.advance()).await;
            Ok((x?, y?))
        })
    };
    CoroutineIterator::new(factory, (a, b)).labelled(Label::new(module_path!(), "azip"))
}

/// Zip any number of iterables of one type into `Vec`s in argument order.
///
/// Zero sources produce nothing. Like [`azip`], the lowest-indexed source
/// that stops decides the signal.
pub fn azip_all<I>(
    iterables: Vec<I>,
) -> impl AsyncIterator<Item = Vec<I::Item>, Error = I::Error> + Debug
where
    I: AsyncIterable,
{
    let factory = async |iterables: Vec<I>| -> Result<_, I::Error> {
        let mut iterators = try_join_all(iterables.into_iter().map(aiter)).await?;
        Ok(async move || -> Result<Vec<I::Item>, Stop<I::Error>> {
            if iterators.is_empty() {
                return Err(Stop::Exhausted);
            }
            let steps = join_all(iterators.iter_mut().map(|it| it.advance())).await;
            steps.into_iter().collect()
        })
    };
    CoroutineIterator::new(factory, iterables).labelled(Label::new(module_path!(), "azip_all"))
}
