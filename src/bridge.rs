//! Bridges from synchronous iteration and plain functions.

use crate::coroutine::{CoroutineIterator, Label};
use crate::error::Stop;
use crate::protocol::AsyncIterator;
use futures::future::{Ready, ready};
use std::convert::Infallible;
use std::fmt;

/// Lift a synchronous iterable into an [`AsyncIterator`].
///
/// Every call builds an independent instance; the synchronous iterator is
/// obtained on first advance.
pub fn to_aiter<I>(
    iterable: I,
) -> impl AsyncIterator<Item = I::Item, Error = Infallible> + fmt::Debug
where
    I: IntoIterator,
{
    let factory = async |iterable: I| -> Result<_, Infallible> {
        let mut iter = iterable.into_iter();
        Ok(async move || -> Result<I::Item, Stop<Infallible>> {
            iter.next().ok_or(Stop::Exhausted)
        })
    };
    CoroutineIterator::new(factory, iterable).labelled(Label::new(module_path!(), "to_aiter"))
}

/// A synchronous function callable as an async one.
///
/// Produced by [`to_async`]. The result of [`call`](AsyncFn::call) is already
/// complete; awaiting it never suspends.
#[derive(Clone)]
pub struct AsyncFn<F> {
    func: F,
    label: Label,
}

/// Wrap `func` so that calling it returns a completed future.
///
/// The wrapper keeps `func`'s module path and name for introspection.
/// Functions of several arguments take them as a tuple.
#[must_use]
pub fn to_async<F>(func: F) -> AsyncFn<F> {
    AsyncFn {
        func,
        label: Label::of::<F>(),
    }
}

impl<F> AsyncFn<F> {
    /// Call the wrapped function.
    #[inline]
    pub fn call<A, R>(&self, arg: A) -> Ready<R>
    where
        F: Fn(A) -> R,
    {
        ready((self.func)(arg))
    }

    /// Module path and name of the wrapped function.
    #[inline]
    #[must_use]
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Bare name of the wrapped function.
    #[inline]
    pub fn name(&self) -> &str {
        self.label.name()
    }

    /// Declaring module path of the wrapped function.
    #[inline]
    pub fn module(&self) -> &str {
        self.label.module()
    }

    /// Unwrap the synchronous function.
    pub fn into_inner(self) -> F {
        self.func
    }
}

impl<F> fmt::Debug for AsyncFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<async fn {}>", self.label)
    }
}
