//! `aitertools` - async itertools
//!
//! Async counterparts of `iter`/`next`, a way to lift an async factory into
//! a restartable self-iterating type, and async ports of the common
//! sequence combinators, plus `schedule` for pacing one sequence against
//! another.
//!
//! Every combinator consumes [`AsyncIterable`]s and produces
//! [`AsyncIterator`]s, so the library is closed under composition.

// Module declarations
pub mod bridge;
pub mod collect;
pub mod combinators;
pub mod coroutine;
pub mod error;
pub mod protocol;
pub mod runtime;

// Re-export the protocol
pub use error::{Next, Stop};
pub use protocol::{AsyncIterable, AsyncIterator, MapErr, aiter, anext, anext_or};

// Re-export the construction protocol
pub use coroutine::{CoroutineIterator, CoroutineType, Label, coroutine_iterator};

// Re-export bridges and collectors
pub use bridge::{AsyncFn, to_aiter, to_async};
pub use collect::{alist, atuple};

// Re-export combinators
pub use combinators::{
    aaccumulate, aaccumulate_with, acount, acycle, arepeat, azip, azip_all, schedule,
};

// Re-export runtime interop
pub use runtime::{from_stream, into_stream, ticks, ticks_with, try_from_stream};
