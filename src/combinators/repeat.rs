//! Repeating a single value.

use crate::coroutine::{CoroutineIterator, Label};
use crate::error::Stop;
use crate::protocol::AsyncIterator;
use std::convert::Infallible;
use std::fmt::Debug;

/// Yield `value` forever, or exactly `times` times when given.
pub fn arepeat<T>(
    value: T,
    times: Option<usize>,
) -> impl AsyncIterator<Item = T, Error = Infallible> + Debug
where
    T: Clone,
{
    let factory = async |(value, times): (T, Option<usize>)| -> Result<_, Infallible> {
        let mut left = times;
        Ok(async move || -> Result<T, Stop<Infallible>> {
            match &mut left {
                Some(0) => Err(Stop::Exhausted),
                Some(n) => {
                    *n -= 1;
                    Ok(value.clone())
                }
                None => Ok(value.clone()),
            }
        })
    };
    CoroutineIterator::new(factory, (value, times)).labelled(Label::new(module_path!(), "arepeat"))
}
