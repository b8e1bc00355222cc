// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::{FutureExt, Stream};
use livefeed::ActivityEvent;
use std::time::Duration;
use tokio::task::yield_now;
use tokio::time::{advance, sleep};

/// Yields enough times for woken background tasks to run to their next await.
pub async fn settle() {
    for _ in 0..8 {
        yield_now().await;
    }
}

/// Advances the paused clock by `n` intervals, one interval at a time,
/// letting background tasks run after each step.
pub async fn advance_intervals(n: u32, interval: Duration) {
    for _ in 0..n {
        advance(interval).await;
        settle().await;
    }
}

/// Panics if `stream` has an item ready right now.
///
/// Unlike a timed wait, this does not move a paused clock.
pub fn assert_no_element_emitted<S, T>(stream: &mut S)
where
    S: Stream<Item = T> + Unpin,
{
    if let Some(Some(_)) = stream.next().now_or_never() {
        panic!("Unexpected element emitted, expected no output.");
    }
}

/// Next item of `stream`, panicking if none arrives within `timeout_ms`.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> T
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        item = stream.next() => item.expect("stream ended unexpectedly"),
        _ = sleep(Duration::from_millis(timeout_ms)) => {
            panic!("Timeout waiting for stream element");
        }
    }
}

/// Raw ids of `events`, in order.
pub fn ids<I: Copy>(events: &[ActivityEvent<I>]) -> Vec<u64> {
    events.iter().map(|event| event.id().get()).collect()
}
