// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::{FutureExt, StreamExt};
use livefeed::{ActivityFeedSimulator, TokioTimer};
use livefeed_test_utils::fixtures::{seeded_config, seeded_config_with_capacity, TEST_INTERVAL};
use livefeed_test_utils::helpers::{
    advance_intervals, assert_no_element_emitted, ids, unwrap_stream,
};

#[tokio::test(start_paused = true)]
async fn test_subscribe_replays_the_current_log() -> anyhow::Result<()> {
    // Arrange
    let feed = ActivityFeedSimulator::new(seeded_config(), TokioTimer)?;
    feed.tick();
    feed.tick();

    // Act
    let mut snapshots = feed.subscribe()?;

    // Assert
    let replayed = unwrap_stream(&mut snapshots, 100).await;
    assert_eq!(ids(&replayed), vec![2, 1]);
    assert_no_element_emitted(&mut snapshots);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_empty_log_is_replayed_as_an_empty_snapshot() -> anyhow::Result<()> {
    // Arrange
    let feed = ActivityFeedSimulator::new(seeded_config(), TokioTimer)?;

    // Act
    let mut snapshots = feed.subscribe()?;

    // Assert
    let replayed = unwrap_stream(&mut snapshots, 100).await;
    assert!(replayed.is_empty());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_one_snapshot_per_tick() -> anyhow::Result<()> {
    // Arrange
    let feed = ActivityFeedSimulator::launch(seeded_config(), TokioTimer)?;
    let mut snapshots = feed.subscribe()?;
    let _ = unwrap_stream(&mut snapshots, 100).await;

    for tick in 1..=3_u64 {
        // Act
        advance_intervals(1, TEST_INTERVAL).await;

        // Assert
        let snapshot = unwrap_stream(&mut snapshots, 100).await;
        assert_eq!(snapshot[0].id().get(), tick);
        assert_eq!(snapshot.len() as u64, tick);
        assert_no_element_emitted(&mut snapshots);
    }
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_snapshots_match_the_log_after_eviction() -> anyhow::Result<()> {
    // Arrange
    let feed = ActivityFeedSimulator::launch(seeded_config_with_capacity(2), TokioTimer)?;
    let mut snapshots = feed.subscribe()?;
    let _ = unwrap_stream(&mut snapshots, 100).await;

    // Act
    advance_intervals(3, TEST_INTERVAL).await;

    // Assert
    let mut last = Vec::new();
    while let Some(Some(snapshot)) = snapshots.next().now_or_never() {
        last = snapshot;
    }
    assert_eq!(ids(&last), vec![3, 2]);
    assert_eq!(ids(&last), ids(&feed.snapshot()));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_no_snapshots_after_stop() -> anyhow::Result<()> {
    // Arrange
    let feed = ActivityFeedSimulator::launch(seeded_config(), TokioTimer)?;
    let mut snapshots = feed.subscribe()?;
    let _ = unwrap_stream(&mut snapshots, 100).await;
    advance_intervals(1, TEST_INTERVAL).await;
    let _ = unwrap_stream(&mut snapshots, 100).await;

    // Act
    feed.stop();
    advance_intervals(5, TEST_INTERVAL).await;

    // Assert
    assert_no_element_emitted(&mut snapshots);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_every_subscriber_sees_the_same_snapshots() -> anyhow::Result<()> {
    // Arrange
    let feed = ActivityFeedSimulator::launch(seeded_config(), TokioTimer)?;
    let mut first = feed.subscribe()?;
    let mut second = feed.subscribe()?;
    let _ = unwrap_stream(&mut first, 100).await;
    let _ = unwrap_stream(&mut second, 100).await;

    // Act
    advance_intervals(1, TEST_INTERVAL).await;

    // Assert
    let a = unwrap_stream(&mut first, 100).await;
    let b = unwrap_stream(&mut second, 100).await;
    assert_eq!(a, b);
    assert_eq!(ids(&a), vec![1]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_late_subscriber_gets_the_latest_snapshot_only() -> anyhow::Result<()> {
    // Arrange
    let feed = ActivityFeedSimulator::launch(seeded_config(), TokioTimer)?;
    advance_intervals(3, TEST_INTERVAL).await;

    // Act
    let mut snapshots = feed.subscribe()?;

    // Assert
    let replayed = unwrap_stream(&mut snapshots, 100).await;
    assert_eq!(ids(&replayed), vec![3, 2, 1]);
    assert_no_element_emitted(&mut snapshots);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_dropping_a_subscriber_does_not_affect_the_feed() -> anyhow::Result<()> {
    // Arrange
    let feed = ActivityFeedSimulator::launch(seeded_config(), TokioTimer)?;
    let dropped = feed.subscribe()?;
    let mut kept = feed.subscribe()?;
    let _ = unwrap_stream(&mut kept, 100).await;

    // Act
    drop(dropped);
    advance_intervals(2, TEST_INTERVAL).await;

    // Assert
    assert_eq!(feed.len(), 2);
    let first = unwrap_stream(&mut kept, 100).await;
    let second = unwrap_stream(&mut kept, 100).await;
    assert_eq!(ids(&first), vec![1]);
    assert_eq!(ids(&second), vec![2, 1]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_dropping_the_simulator_ends_streams() -> anyhow::Result<()> {
    // Arrange
    let feed = ActivityFeedSimulator::launch(seeded_config(), TokioTimer)?;
    let mut snapshots = feed.subscribe()?;
    let _ = unwrap_stream(&mut snapshots, 100).await;

    // Act
    drop(feed);

    // Assert
    assert!(snapshots.next().await.is_none());
    Ok(())
}
