//! Pacing one sequence against another.

use super::zip::azip;
use crate::coroutine::{CoroutineIterator, Label};
use crate::error::Stop;
use crate::protocol::{AsyncIterable, AsyncIterator};
use std::fmt::Debug;

/// Yield `iterable`'s elements, each one released together with an element
/// of `scheduler`.
///
/// Both sides advance concurrently; the scheduler's values are dropped.
/// Iteration ends when either side stops, so a clock-like scheduler throttles
/// the sequence and a finite one truncates it.
pub fn schedule<I, S>(
    iterable: I,
    scheduler: S,
) -> impl AsyncIterator<Item = I::Item, Error = I::Error> + Debug
where
    I: AsyncIterable,
    S: AsyncIterable<Error = I::Error>,
{
    let factory = async |(iterable, scheduler): (I, S)| -> Result<_, I::Error> {
        let mut paced = azip(iterable, scheduler);
        Ok(async move || -> Result<I::Item, Stop<I::Error>> {
            let (item, _) = paced.advance().await?;
            Ok(item)
        })
    };
    CoroutineIterator::new(factory, (iterable, scheduler))
        .labelled(Label::new(module_path!(), "schedule"))
}
