//! Runtime module
//!
//! Bridges to the `futures` stream ecosystem and tokio-driven clock sources.

pub mod clock;
pub mod stream;

// Re-export runtime types
pub use clock::{ticks, ticks_with};
pub use stream::{StreamIter, TryStreamIter, from_stream, into_stream, try_from_stream};
