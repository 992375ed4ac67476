//! Endless replay of a finite sequence.

use crate::coroutine::{CoroutineIterator, Label};
use crate::error::Stop;
use crate::protocol::{AsyncIterable, AsyncIterator, aiter};
use std::fmt::Debug;

/// Stream the source once while caching it, then replay the cache forever.
///
/// The source must be finite: every element it yields is kept, so an
/// infinite source grows the cache without bound. An empty source ends the
/// cycle immediately.
pub fn acycle<I>(iterable: I) -> impl AsyncIterator<Item = I::Item, Error = I::Error> + Debug
where
    I: AsyncIterable,
    I::Item: Clone,
{
    let factory = async |iterable: I| -> Result<_, I::Error> {
        let mut source = Some(aiter(iterable).await?);
        let mut saved: Vec<I::Item> = Vec::new();
        let mut pos = 0;
        Ok(async move || -> Result<I::Item, Stop<I::Error>> {
            if let Some(iterator) = source.as_mut() {
                let step = iterator.advance().await;
                match step {
                    Ok(item) => {
                        saved.push(item.clone());
                        return Ok(item);
                    }
                    Err(Stop::Exhausted) => source = None,
                    Err(failure) => return Err(failure),
                }
            }
            let item = saved.get(pos).cloned().ok_or(Stop::Exhausted)?;
            pos = (pos + 1) % saved.len();
            Ok(item)
        })
    };
    CoroutineIterator::new(factory, iterable).labelled(Label::new(module_path!(), "acycle"))
}
