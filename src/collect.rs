//! Draining async iterables into collections.

use crate::error::Stop;
use crate::protocol::{AsyncIterable, AsyncIterator, aiter};

/// Collect every element, in order, into a `Vec`.
pub async fn alist<I: AsyncIterable>(iterable: I) -> Result<Vec<I::Item>, I::Error> {
    let mut iterator = aiter(iterable).await?;
    let mut items = Vec::new();
    loop {
        match iterator.advance().await {
            Ok(item) => items.push(item),
            Err(Stop::Exhausted) => return Ok(items),
            Err(Stop::Failed(e)) => return Err(e),
        }
    }
}

/// Collect every element, in order, into an immutable boxed slice.
pub async fn atuple<I: AsyncIterable>(iterable: I) -> Result<Box<[I::Item]>, I::Error> {
    alist(iterable).await.map(Vec::into_boxed_slice)
}
