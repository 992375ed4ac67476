//! Infinite arithmetic progressions.

use crate::coroutine::{CoroutineIterator, Label};
use crate::error::Stop;
use crate::protocol::AsyncIterator;
use std::convert::Infallible;
use std::fmt::Debug;
use std::ops::Add;

/// `start`, `start + step`, `start + 2 * step`, ... without end.
pub fn acount<T>(
    start: T,
    step: T,
) -> impl AsyncIterator<Item = T, Error = Infallible> + Debug
where
    T: Add<Output = T> + Clone,
{
    let factory = async |(start, step): (T, T)| -> Result<_, Infallible> {
        let mut current = start;
        let mut started = false;
        // only values that are asked for are ever computed
        Ok(async move || -> Result<T, Stop<Infallible>> {
            if started {
                current = current.clone() + step.clone();
            }
            started = true;
            Ok(current.clone())
        })
    };
    CoroutineIterator::new(factory, (start, step)).labelled(Label::new(module_path!(), "acount"))
}
