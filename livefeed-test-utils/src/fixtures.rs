// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use livefeed::{ActivityEvent, EventDetails, EventId, FeedConfig};
use std::time::Duration;

/// Seed used by [`seeded_config`].
pub const TEST_SEED: u64 = 0x5eed;

/// Tick interval used by [`seeded_config`].
pub const TEST_INTERVAL: Duration = Duration::from_secs(10);

/// Default configuration with a fixed RNG seed and a 10 s interval.
pub fn seeded_config() -> FeedConfig {
    FeedConfig::default()
        .with_interval(TEST_INTERVAL)
        .with_rng_seed(TEST_SEED)
}

/// [`seeded_config`] with a different capacity.
pub fn seeded_config_with_capacity(capacity: usize) -> FeedConfig {
    seeded_config().with_capacity(capacity)
}

pub fn comment_event<I: Copy>(id: u64, timestamp: I) -> ActivityEvent<I> {
    ActivityEvent::new(
        EventId::new(id),
        timestamp,
        EventDetails::Comment {
            group: "Side Hustle Club".to_owned(),
            user: "Jordan Lee".to_owned(),
            content: "Sounds good, dm me".to_owned(),
            matched_phrase: "dm me".to_owned(),
        },
    )
}

pub fn message_event<I: Copy>(id: u64, timestamp: I) -> ActivityEvent<I> {
    ActivityEvent::new(
        EventId::new(id),
        timestamp,
        EventDetails::Message {
            user: "Sam Rivera".to_owned(),
            content: "Automated message sent".to_owned(),
        },
    )
}

pub fn response_event<I: Copy>(id: u64, timestamp: I) -> ActivityEvent<I> {
    ActivityEvent::new(
        EventId::new(id),
        timestamp,
        EventDetails::Response {
            user: "Alex Morgan".to_owned(),
            content: "Sure, send me the details".to_owned(),
        },
    )
}

pub fn scan_event<I: Copy>(id: u64, timestamp: I) -> ActivityEvent<I> {
    ActivityEvent::new(
        EventId::new(id),
        timestamp,
        EventDetails::Scan {
            group: "Online Income 2024".to_owned(),
            content: "Scan in progress...".to_owned(),
        },
    )
}
