//! Tests for `acycle`.

use aitertools::{AsyncIterator, Next, Stop, acycle, to_aiter};

#[derive(Debug, Clone, PartialEq)]
struct Boom;

/// Yields one value, then fails.
struct Truncated {
    done: bool,
}

impl AsyncIterator for Truncated {
    type Item = char;
    type Error = Boom;

    async fn advance(&mut self) -> Next<char, Boom> {
        if self.done {
            return Err(Stop::Failed(Boom));
        }
        self.done = true;
        Ok('a')
    }
}

#[tokio::test]
async fn test_acycle_replays_source() {
    let mut cycled = acycle(to_aiter([0, 1, 2]));
    for expected in [0, 1, 2, 0, 1, 2, 0, 1, 2, 0] {
        assert_eq!(cycled.advance().await, Ok(expected));
    }
}

#[tokio::test]
async fn test_acycle_single_element() {
    let mut cycled = acycle(to_aiter(["only"]));
    for _ in 0..5 {
        assert_eq!(cycled.advance().await, Ok("only"));
    }
}

#[tokio::test]
async fn test_acycle_empty_source_ends() {
    let mut cycled = acycle(to_aiter(Vec::<u8>::new()));
    assert_eq!(cycled.advance().await, Err(Stop::Exhausted));
    assert_eq!(cycled.advance().await, Err(Stop::Exhausted));
}

#[tokio::test]
async fn test_acycle_propagates_first_pass_failure() {
    let mut cycled = acycle(Truncated { done: false });
    assert_eq!(cycled.advance().await, Ok('a'));
    assert_eq!(cycled.advance().await, Err(Stop::Failed(Boom)));
}
