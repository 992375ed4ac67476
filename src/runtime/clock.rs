//! Clock-like scheduler sources for [`schedule`](crate::schedule).

use crate::coroutine::{CoroutineIterator, Label};
use crate::error::Stop;
use crate::protocol::AsyncIterator;
use futures::StreamExt;
use std::convert::Infallible;
use std::fmt::Debug;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior, interval};
use tokio_stream::wrappers::IntervalStream;

/// An endless tick every `period`, the first one immediately.
///
/// Missed ticks burst to catch up, tokio's default.
pub fn ticks(period: Duration) -> impl AsyncIterator<Item = Instant, Error = Infallible> + Debug {
    ticks_with(period, MissedTickBehavior::Burst)
}

/// Like [`ticks`] with an explicit policy for missed ticks.
///
/// The underlying timer is created on first advance, so the iterator can be
/// built outside a tokio runtime but must be advanced inside one.
///
/// # Panics
///
/// On first advance if `period` is zero.
pub fn ticks_with(
    period: Duration,
    missed: MissedTickBehavior,
) -> impl AsyncIterator<Item = Instant, Error = Infallible> + Debug {
    let factory = async |(period, missed): (Duration, MissedTickBehavior)| {
        let mut timer = interval(period);
        timer.set_missed_tick_behavior(missed);
        let mut stream = IntervalStream::new(timer);
        Ok::<_, Infallible>(async move || -> Result<Instant, Stop<Infallible>> {
            stream.next().await.ok_or(Stop::Exhausted)
        })
    };
    CoroutineIterator::new(factory, (period, missed)).labelled(Label::new(module_path!(), "ticks"))
}
