//! Running folds.

use crate::coroutine::{CoroutineIterator, Label};
use crate::error::Stop;
use crate::protocol::{AsyncIterable, AsyncIterator, aiter};
use std::fmt::Debug;
use std::ops::Add;

/// Running sums: `s0`, `s0 + s1`, `s0 + s1 + s2`, ...
pub fn aaccumulate<I>(
    iterable: I,
) -> impl AsyncIterator<Item = I::Item, Error = I::Error> + Debug
where
    I: AsyncIterable,
    I::Item: Add<Output = I::Item> + Clone,
{
    let add = async |total: I::Item, item: I::Item| -> Result<I::Item, I::Error> {
        Ok(total + item)
    };
    aaccumulate_with(iterable, add)
}

/// Running fold with an async `combine`.
///
/// The first element is passed through as-is; every later one is
/// `combine(previous, current)`. A failing `combine` propagates and leaves
/// the running total where it was.
pub fn aaccumulate_with<I, F>(
    iterable: I,
    combine: F,
) -> impl AsyncIterator<Item = I::Item, Error = I::Error> + Debug
where
    I: AsyncIterable,
    I::Item: Clone,
    F: AsyncFnMut(I::Item, I::Item) -> Result<I::Item, I::Error>,
{
    let factory = async |(iterable, mut combine): (I, F)| -> Result<_, I::Error> {
        let mut iterator = aiter(iterable).await?;
        let mut total: Option<I::Item> = None;
        Ok(async move || -> Result<I::Item, Stop<I::Error>> {
            let item = iterator.advance().await?;
            let next = match total.as_ref() {
                None => item,
                Some(previous) => combine(previous.clone(), item).await.map_err(Stop::Failed)?,
            };
            total = Some(next.clone());
            Ok(next)
        })
    };
    CoroutineIterator::new(factory, (iterable, combine))
        .labelled(Label::new(module_path!(), "aaccumulate"))
}
