//! Async ports of the classic itertools combinators, plus `schedule`.
//!
//! Each combinator is a [`CoroutineIterator`](crate::CoroutineIterator) and
//! therefore lazy: nothing is resolved or consumed until the first advance.

pub mod accumulate;
pub mod count;
pub mod cycle;
pub mod repeat;
pub mod schedule;
pub mod zip;

pub use accumulate::{aaccumulate, aaccumulate_with};
pub use count::acount;
pub use cycle::acycle;
pub use repeat::arepeat;
pub use schedule::schedule;
pub use zip::{azip, azip_all};
