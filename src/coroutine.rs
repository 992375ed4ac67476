//! Lifting an async factory into a restartable, self-iterating type.
//!
//! A factory is an async function from construction arguments to an
//! *advance closure*. All per-sequence state (cursors, caches, inner
//! iterators) lives in the closure's captures, so a combinator reads like a
//! generator body instead of a hand-written state machine:
//!
//! ```
//! use aitertools::{alist, coroutine_iterator, Stop};
//! use std::convert::Infallible;
//!
//! let countdown = coroutine_iterator(async |from: u32| -> Result<_, Infallible> {
//!     let mut left = from;
//!     Ok(async move || -> Result<u32, Stop<Infallible>> {
//!         if left == 0 {
//!             return Err(Stop::Exhausted);
//!         }
//!         left -= 1;
//!         Ok(left + 1)
//!     })
//! });
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! assert_eq!(alist(countdown.call(3)).await, Ok(vec![3, 2, 1]));
//! assert_eq!(alist(countdown.call(2)).await, Ok(vec![2, 1]));
//! # });
//! ```

use crate::error::{Next, Stop};
use crate::protocol::AsyncIterator;
use log::{debug, warn};
use std::any::type_name;
use std::borrow::Cow;
use std::fmt;

/// Module path and name of a factory, used for `Debug` output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label {
    module: Cow<'static, str>,
    name: Cow<'static, str>,
}

impl Label {
    /// Build a label from explicit parts, typically `module_path!()` and a name.
    #[must_use]
    pub const fn new(module: &'static str, name: &'static str) -> Self {
        Self {
            module: Cow::Borrowed(module),
            name: Cow::Borrowed(name),
        }
    }

    /// Derive a label from a type's path.
    ///
    /// Generic arguments and `<impl ..>` segments are dropped at any depth:
    /// `Vec::<i32>::len` is labelled `alloc::vec::Vec::len`, `str::len`
    /// is `core::str::len`, and a closure defined inside `my_crate::feed<T>`
    /// is `my_crate::feed::{{closure}}`.
    #[must_use]
    pub fn of<F: ?Sized>() -> Self {
        let full = type_name::<F>();
        if !full.contains('<') {
            return match full.rsplit_once("::") {
                Some((module, name)) => Self::new(module, name),
                None => Self::new("", full),
            };
        }

        let path = strip_generics(full);
        match path.rsplit_once("::") {
            Some((module, name)) => Self {
                module: Cow::Owned(module.to_owned()),
                name: Cow::Owned(name.to_owned()),
            },
            None => Self {
                module: Cow::Borrowed(""),
                name: Cow::Owned(path),
            },
        }
    }

    /// Declaring module path
    #[inline]
    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Bare name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Remove every balanced `<...>` group and rejoin the path segments around it.
fn strip_generics(path: &str) -> String {
    let mut depth = 0usize;
    let mut kept = String::with_capacity(path.len());
    for c in path.chars() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            _ if depth == 0 => kept.push(c),
            _ => {}
        }
    }
    kept.split("::")
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("::")
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.module.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}::{}", self.module, self.name)
        }
    }
}

/// A reusable constructor produced by [`coroutine_iterator`].
///
/// Each [`call`](CoroutineType::call) captures its arguments and returns a
/// fresh, independent [`CoroutineIterator`]; the factory does not run until
/// that instance is first advanced.
#[derive(Clone)]
pub struct CoroutineType<F> {
    factory: F,
    label: Label,
}

/// Turn an async factory into a [`CoroutineType`] labelled after it.
///
/// The label comes from the factory's type path. A named `async fn` keeps
/// its own name, but a closure is labelled after its enclosing function
/// with a `{{closure}}` name; use [`CoroutineType::labelled`] to give it a
/// readable one.
#[must_use]
pub fn coroutine_iterator<F>(factory: F) -> CoroutineType<F> {
    CoroutineType {
        factory,
        label: Label::of::<F>(),
    }
}

impl<F> CoroutineType<F> {
    /// Override the label shown in `Debug` output.
    #[must_use]
    pub fn labelled(mut self, label: Label) -> Self {
        self.label = label;
        self
    }

    /// Module path and name instances of this type are labelled with.
    #[inline]
    #[must_use]
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Capture `args` into a new instance without running the factory.
    pub fn call<A, C, E>(&self, args: A) -> CoroutineIterator<F, A, C>
    where
        F: Clone + AsyncFnOnce(A) -> Result<C, E>,
    {
        CoroutineIterator::new(self.factory.clone(), args).labelled(self.label.clone())
    }
}

impl<F> fmt::Debug for CoroutineType<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<coroutine iterator type {}>", self.label)
    }
}

enum State<F, A, C> {
    Pending { factory: F, args: A },
    Running(C),
    Spent,
}

impl<F, A, C> State<F, A, C> {
    fn as_str(&self) -> &'static str {
        match self {
            State::Pending { .. } => "pending",
            State::Running(_) => "running",
            State::Spent => "spent",
        }
    }
}

/// A single-pass async iterator driven by a lazily built advance closure.
///
/// On the first advance the factory is called with the captured arguments
/// and the closure it returns is kept; every advance, the first included,
/// awaits that closure. The factory runs at most once per instance.
///
/// An instance whose factory failed, or whose first advance was dropped
/// while the factory was in flight, is spent and reports exhaustion from
/// then on.
pub struct CoroutineIterator<F, A, C> {
    state: State<F, A, C>,
    label: Label,
}

impl<F, A, C> CoroutineIterator<F, A, C> {
    /// Capture `factory` and `args`, labelled after the factory.
    ///
    /// Closure factories get a `{{closure}}` name; see [`labelled`](Self::labelled).
    pub fn new<E>(factory: F, args: A) -> Self
    where
        F: AsyncFnOnce(A) -> Result<C, E>,
    {
        Self {
            state: State::Pending { factory, args },
            label: Label::of::<F>(),
        }
    }

    /// Override the label shown in `Debug` output.
    #[must_use]
    pub fn labelled(mut self, label: Label) -> Self {
        self.label = label;
        self
    }

    /// Module path and name shown in `Debug` output.
    #[inline]
    #[must_use]
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Whether the factory has not run yet.
    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self.state, State::Pending { .. })
    }
}

impl<F, A, C, T, E> AsyncIterator for CoroutineIterator<F, A, C>
where
    F: AsyncFnOnce(A) -> Result<C, E>,
    C: AsyncFnMut() -> Result<T, Stop<E>>,
{
    type Item = T;
    type Error = E;

    async fn advance(&mut self) -> Next<T, E> {
        match std::mem::replace(&mut self.state, State::Spent) {
            State::Pending { factory, args } => {
                debug!("{}: running factory", self.label);
                let step = factory(args).await.map_err(Stop::Failed)?;
                self.state = State::Running(step);
            }
            other => self.state = other,
        }

        match &mut self.state {
            State::Running(step) => step().await,
            State::Pending { .. } | State::Spent => {
                warn!("{}: advanced after its factory was lost", self.label);
                Err(Stop::Exhausted)
            }
        }
    }
}

impl<F, A, C> fmt::Debug for CoroutineIterator<F, A, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.label.to_string();
        f.debug_struct(&name)
            .field("state", &self.state.as_str())
            .finish()
    }
}
