// Demo: pace a word list against a clock.
//
// Run with RUST_LOG=debug to watch each combinator's factory start lazily.

use aitertools::{aaccumulate, alist, schedule, ticks, to_aiter};
use anyhow::Result;
use std::time::Duration;

const WORDS: &[&str] = &["lazy", "factories", "paced", "by", "a", "clock"];

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let paced = schedule(to_aiter(WORDS.iter().copied()), ticks(Duration::from_millis(50)));
    let words = alist(paced).await?;

    let lengths = alist(aaccumulate(to_aiter(words.iter().map(|w| w.len())))).await?;
    for (word, total) in words.iter().zip(lengths) {
        println!("{word:<10} {total:>3}");
    }

    Ok(())
}
