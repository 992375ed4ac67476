//! Tests for `schedule`.

use aitertools::{AsyncIterator, Next, Stop, alist, arepeat, schedule, to_aiter};
use std::convert::Infallible;
use std::time::Duration;
use tokio::time::{Instant, sleep};

/// Counts up, sleeping `delay` before each element.
struct Slow {
    delay: Duration,
    next: u32,
}

impl AsyncIterator for Slow {
    type Item = u32;
    type Error = Infallible;

    async fn advance(&mut self) -> Next<u32, Infallible> {
        sleep(self.delay).await;
        self.next += 1;
        Ok(self.next - 1)
    }
}

fn slow(secs: u64) -> Slow {
    Slow {
        delay: Duration::from_secs(secs),
        next: 0,
    }
}

#[tokio::test]
async fn test_schedule_yields_source_elements() {
    let paced = schedule(to_aiter(["a", "b", "c"]), arepeat((), None));
    assert_eq!(alist(paced).await, Ok(vec!["a", "b", "c"]));
}

#[tokio::test]
async fn test_schedule_truncates_to_scheduler() {
    let mut scheduler = to_aiter(0..3);
    let paced = schedule(to_aiter(["a", "b", "c", "d", "e"]), &mut scheduler);
    assert_eq!(alist(paced).await, Ok(vec!["a", "b", "c"]));
    assert_eq!(scheduler.advance().await, Err(Stop::Exhausted));
}

#[tokio::test]
async fn test_schedule_advances_scheduler_in_lockstep() {
    let mut scheduler = to_aiter(0..10);
    let paced = schedule(to_aiter([1, 2]), &mut scheduler);
    assert_eq!(alist(paced).await, Ok(vec![1, 2]));
    // the advance that found the source exhausted still drew one tick
    assert_eq!(scheduler.advance().await, Ok(3));
}

#[tokio::test(start_paused = true)]
async fn test_schedule_waits_for_slowest_side_only() {
    let mut paced = schedule(slow(1), slow(2));

    let start = Instant::now();
    assert_eq!(paced.advance().await, Ok(0));
    assert_eq!(paced.advance().await, Ok(1));
    // each advance costs the slower side's 2s, not 3s
    assert!(start.elapsed() >= Duration::from_secs(4));
    assert!(start.elapsed() < Duration::from_secs(6));
}
