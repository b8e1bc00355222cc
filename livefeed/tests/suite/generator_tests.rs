// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use livefeed::{
    EventDetails, EventGenerator, EventKind, FeedConfig, KindDistribution, KindWeights,
    PhraseMatcher,
};
use livefeed_test_utils::fixtures::{seeded_config, TEST_SEED};
use std::time::{Duration, Instant};

#[test]
fn test_default_generator_only_produces_comments_and_scans() -> anyhow::Result<()> {
    let mut generator = EventGenerator::from_config(&seeded_config())?;

    for tick in 0..500_u64 {
        let event = generator.next_event(tick);
        assert!(matches!(event.kind(), EventKind::Comment | EventKind::Scan));
    }
    Ok(())
}

#[test]
fn test_same_seed_produces_same_events() -> anyhow::Result<()> {
    let mut a = EventGenerator::from_config(&seeded_config())?;
    let mut b = EventGenerator::from_config(&seeded_config())?;

    for tick in 0..50_u64 {
        assert_eq!(a.next_event(tick), b.next_event(tick));
    }
    Ok(())
}

#[test]
fn test_every_kind_follows_its_schema() -> anyhow::Result<()> {
    let config = FeedConfig::default()
        .with_weights(KindWeights::uniform())
        .with_rng_seed(TEST_SEED);
    let mut generator = EventGenerator::from_config(&config)?;

    for tick in 0..200_u64 {
        let event = generator.next_event(tick);
        match event.details() {
            EventDetails::Comment {
                content,
                matched_phrase,
                ..
            } => {
                assert!(
                    content.to_lowercase().contains(&matched_phrase.to_lowercase()),
                    "{content:?} should contain {matched_phrase:?}"
                );
            }
            EventDetails::Message { .. } | EventDetails::Response { .. } => {
                assert!(event.group().is_none());
            }
            EventDetails::Scan { .. } => {
                assert!(event.user().is_none());
            }
        }
        assert_eq!(event.timestamp(), tick);
    }
    Ok(())
}

#[test]
fn test_comment_phrase_comes_from_monitored_list() -> anyhow::Result<()> {
    let matcher = PhraseMatcher::new(["ping me", "want in"])?;
    let distribution = KindDistribution::new(KindWeights::only(EventKind::Comment))?;
    let mut generator = EventGenerator::new(distribution, matcher, Some(1));

    for tick in 0..50_u64 {
        let event = generator.next_event(tick);
        let phrase = event.matched_phrase().unwrap_or_default();
        assert!(["ping me", "want in"].contains(&phrase), "got {phrase:?}");
    }
    Ok(())
}

#[test]
fn test_seed_history_is_oldest_first_with_one_of_each_kind() -> anyhow::Result<()> {
    // Arrange
    let mut generator = EventGenerator::from_config(&seeded_config())?;
    let now = Instant::now() + Duration::from_secs(3_600);

    // Act
    let history = generator.seed_history(now);

    // Assert
    let kinds: Vec<_> = history.iter().map(|event| event.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            EventKind::Scan,
            EventKind::Response,
            EventKind::Message,
            EventKind::Comment
        ]
    );

    let ages: Vec<_> = history.iter().map(|event| event.age(now)).collect();
    let minutes = |m: u64| Duration::from_secs(m * 60);
    assert_eq!(ages, vec![minutes(12), minutes(8), minutes(5), minutes(2)]);

    let ids: Vec<_> = history.iter().map(|event| event.id().get()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(generator.generated(), 4);
    Ok(())
}

#[test]
fn test_seed_history_near_clock_origin_stamps_unreachable_ages_with_now() -> anyhow::Result<()> {
    // Arrange
    let mut generator = EventGenerator::from_config(&seeded_config())?;
    let now = Duration::from_secs(300);

    // Act
    let history = generator.seed_history(now);

    // Assert
    let ages: Vec<_> = history.iter().map(|event| event.age(now)).collect();
    let minutes = |m: u64| Duration::from_secs(m * 60);
    assert_eq!(ages, vec![Duration::ZERO, Duration::ZERO, minutes(5), minutes(2)]);

    let ids: Vec<_> = history.iter().map(|event| event.id().get()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    Ok(())
}
