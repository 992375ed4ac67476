//! Tests for stream interop.

use aitertools::runtime::{from_stream, into_stream, try_from_stream};
use aitertools::{AsyncIterator, Next, Stop, acount, alist, azip, to_aiter};
use futures::StreamExt;
use futures::stream;

#[derive(Debug, Clone, PartialEq)]
struct Boom;

#[tokio::test]
async fn test_from_stream() {
    let iterator = from_stream(stream::iter(vec![1, 2, 3]));
    assert_eq!(alist(iterator).await, Ok(vec![1, 2, 3]));
}

#[tokio::test]
async fn test_from_stream_zips_with_combinators() {
    let zipped = azip(acount(1, 1), from_stream(stream::iter(["a", "b"])));
    assert_eq!(alist(zipped).await, Ok(vec![(1, "a"), (2, "b")]));
}

#[tokio::test]
async fn test_try_from_stream_forwards_failures() {
    let mut iterator = try_from_stream(stream::iter(vec![Ok(1), Err(Boom), Ok(3)]));
    assert_eq!(iterator.advance().await, Ok(1));
    assert_eq!(iterator.advance().await, Err(Stop::Failed(Boom)));
    assert_eq!(iterator.advance().await, Ok(3));
    assert_eq!(iterator.advance().await, Err(Stop::Exhausted));
}

#[tokio::test]
async fn test_into_stream() {
    let items: Vec<_> = into_stream(to_aiter([1, 2])).collect().await;
    assert_eq!(items, vec![Ok(1), Ok(2)]);
}

#[tokio::test]
async fn test_into_stream_ends_after_failure() {
    struct Failing;

    impl AsyncIterator for Failing {
        type Item = u8;
        type Error = Boom;

        async fn advance(&mut self) -> Next<u8, Boom> {
            Err(Stop::Failed(Boom))
        }
    }

    let items: Vec<_> = into_stream(Failing).collect().await;
    assert_eq!(items, vec![Err(Boom)]);
}
