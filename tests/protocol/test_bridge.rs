//! Tests for the synchronous bridges.

use aitertools::{AsyncIterator, Stop, alist, atuple, to_aiter, to_async};

fn double(x: i32) -> i32 {
    x * 2
}

#[tokio::test]
async fn test_to_aiter_round_trip() {
    let values = vec!["a", "b", "c"];
    assert_eq!(alist(to_aiter(values.clone())).await, Ok(values));
}

#[tokio::test]
async fn test_to_aiter_tuple_round_trip() {
    let values = atuple(to_aiter([1, 2, 3])).await.unwrap();
    assert_eq!(&*values, &[1, 2, 3]);
}

#[tokio::test]
async fn test_to_aiter_over_plain_iterator() {
    let squares = (1..).map(|n: u64| n * n).take(4);
    assert_eq!(alist(to_aiter(squares)).await, Ok(vec![1, 4, 9, 16]));
}

#[tokio::test]
async fn test_to_aiter_instances_are_independent() {
    let values = [10, 20];
    let mut first = to_aiter(values);
    let mut second = to_aiter(values);

    assert_eq!(first.advance().await, Ok(10));
    assert_eq!(first.advance().await, Ok(20));
    assert_eq!(second.advance().await, Ok(10));
    assert_eq!(first.advance().await, Err(Stop::Exhausted));
    assert_eq!(first.advance().await, Err(Stop::Exhausted));
}

#[tokio::test]
async fn test_to_async_matches_direct_call() {
    let async_double = to_async(double);
    assert_eq!(async_double.call(21).await, double(21));

    let add = to_async(|(a, b): (i32, i32)| a + b);
    assert_eq!(add.call((2, 3)).await, 5);
}

#[test]
fn test_to_async_keeps_name_and_module() {
    let async_double = to_async(double);
    assert_eq!(async_double.name(), "double");
    assert!(async_double.module().ends_with("test_bridge"));
    assert_eq!(
        format!("{async_double:?}"),
        format!("<async fn {}::double>", async_double.module())
    );
    assert_eq!((async_double.into_inner())(4), 8);
}

#[tokio::test]
async fn test_to_async_names_inherent_methods() {
    let len = to_async(str::len);
    assert_eq!(len.name(), "len");
    assert_eq!(len.module(), "core::str");
    assert_eq!(len.label().to_string(), "core::str::len");
    assert_eq!(len.call("four").await, 4);

    let vec_len = to_async(Vec::<i32>::len);
    assert_eq!(vec_len.name(), "len");
    assert_eq!(vec_len.module(), "alloc::vec::Vec");
    assert_eq!(vec_len.call(&vec![1, 2, 3]).await, 3);
}
