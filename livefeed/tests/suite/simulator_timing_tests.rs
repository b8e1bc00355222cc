// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use livefeed::{ActivityFeedSimulator, TokioTimer};
use livefeed_test_utils::fixtures::{seeded_config, seeded_config_with_capacity, TEST_INTERVAL};
use livefeed_test_utils::helpers::{advance_intervals, ids, settle};
use std::time::Duration;
use tokio::time::advance;

#[tokio::test(start_paused = true)]
async fn test_no_time_elapsed_no_events() -> anyhow::Result<()> {
    // Arrange
    let feed = ActivityFeedSimulator::launch(seeded_config(), TokioTimer)?;

    // Act
    advance(Duration::ZERO).await;
    settle().await;

    // Assert
    assert!(feed.is_empty());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_one_interval_emits_exactly_one_event() -> anyhow::Result<()> {
    // Arrange
    let feed = ActivityFeedSimulator::launch(seeded_config(), TokioTimer)?;

    // Act
    advance_intervals(1, TEST_INTERVAL).await;

    // Assert
    let snapshot = feed.snapshot();
    assert_eq!(ids(&snapshot), vec![1]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_nothing_before_first_interval_elapses() -> anyhow::Result<()> {
    // Arrange
    let feed = ActivityFeedSimulator::launch(seeded_config(), TokioTimer)?;

    // Act
    advance(TEST_INTERVAL - Duration::from_millis(1)).await;
    settle().await;
    let before = feed.len();
    advance(Duration::from_millis(1)).await;
    settle().await;

    // Assert
    assert_eq!(before, 0);
    assert_eq!(feed.len(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_twenty_five_intervals_keep_ticks_six_to_twenty_five() -> anyhow::Result<()> {
    // Arrange
    let feed = ActivityFeedSimulator::launch(seeded_config_with_capacity(20), TokioTimer)?;

    // Act
    advance_intervals(25, TEST_INTERVAL).await;

    // Assert
    let expected: Vec<u64> = (6..=25).rev().collect();
    assert_eq!(ids(&feed.snapshot()), expected);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_log_never_exceeds_capacity_and_newest_is_first() -> anyhow::Result<()> {
    // Arrange
    let feed = ActivityFeedSimulator::launch(seeded_config_with_capacity(5), TokioTimer)?;

    for tick in 1..=12_u64 {
        // Act
        advance_intervals(1, TEST_INTERVAL).await;

        // Assert
        let snapshot = feed.snapshot();
        assert!(snapshot.len() <= 5);
        assert_eq!(snapshot[0].id().get(), tick);
        assert!(snapshot.windows(2).all(|pair| pair[0].id() > pair[1].id()));
    }
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_stop_midway_freezes_the_log() -> anyhow::Result<()> {
    // Arrange
    let feed = ActivityFeedSimulator::launch(seeded_config(), TokioTimer)?;
    advance_intervals(3, TEST_INTERVAL).await;

    // Act
    feed.stop();
    advance_intervals(10, TEST_INTERVAL).await;

    // Assert
    assert_eq!(ids(&feed.snapshot()), vec![3, 2, 1]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_restart_schedules_from_restart_time() -> anyhow::Result<()> {
    // Arrange
    let feed = ActivityFeedSimulator::launch(seeded_config(), TokioTimer)?;
    advance_intervals(1, TEST_INTERVAL).await;
    feed.stop();
    advance(Duration::from_secs(4)).await;
    settle().await;

    // Act
    feed.start();
    advance(TEST_INTERVAL - Duration::from_secs(1)).await;
    settle().await;
    let before = feed.len();
    advance(Duration::from_secs(1)).await;
    settle().await;

    // Assert
    assert_eq!(before, 1);
    assert_eq!(ids(&feed.snapshot()), vec![2, 1]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_late_ticker_catches_up_missed_ticks() -> anyhow::Result<()> {
    // Arrange
    let feed = ActivityFeedSimulator::launch(seeded_config(), TokioTimer)?;

    // Act
    advance(TEST_INTERVAL * 3).await;
    settle().await;
    settle().await;

    // Assert
    assert_eq!(ids(&feed.snapshot()), vec![3, 2, 1]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_timestamps_follow_the_injected_clock() -> anyhow::Result<()> {
    // Arrange
    let timer = TokioTimer;
    let start = tokio::time::Instant::now();
    let feed = ActivityFeedSimulator::launch(seeded_config(), timer)?;

    // Act
    advance_intervals(2, TEST_INTERVAL).await;

    // Assert
    let snapshot = feed.snapshot();
    assert_eq!(snapshot[0].timestamp() - start, TEST_INTERVAL * 2);
    assert_eq!(snapshot[1].timestamp() - start, TEST_INTERVAL);
    Ok(())
}
