// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Synthetic event construction.
//!
//! Field values come from fixed placeholder pools; nothing is read from a
//! real data source. With a fixed RNG seed the sequence of produced events is
//! reproducible.

use crate::config::FeedConfig;
use crate::distribution::KindDistribution;
use crate::event::{ActivityEvent, EventDetails, EventId, EventKind};
use crate::phrases::PhraseMatcher;
use core::time::Duration;
use livefeed_core::Result;
use livefeed_runtime::CheckedInstant;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const GROUPS: [&str; 4] = [
    "Online Income 2024",
    "Work From Home Network",
    "Side Hustle Club",
    "Network Marketing Circle",
];

const USERS: [&str; 5] = [
    "New User",
    "Jordan Lee",
    "Sam Rivera",
    "Alex Morgan",
    "Casey Brooks",
];

const COMMENT_TEMPLATES: [&str; 4] = [
    "{phrase}",
    "Sounds good, {phrase}",
    "{phrase}, how does it work?",
    "Count me in - {phrase}",
];

const MESSAGE_CONTENTS: [&str; 2] = ["Automated message sent", "Follow-up message sent"];

const RESPONSE_CONTENTS: [&str; 2] = [
    "Thanks for the message, I'm interested!",
    "Sure, send me the details",
];

const SCAN_CONTENTS: [&str; 2] = [
    "Scan in progress...",
    "Scan finished - found 3 new comments",
];

/// Builds activity events with increasing ids.
#[derive(Debug, Clone)]
pub struct EventGenerator {
    distribution: KindDistribution,
    matcher: PhraseMatcher,
    rng: StdRng,
    last_id: u64,
}

impl EventGenerator {
    /// `seed` makes the produced content reproducible; `None` seeds from the OS.
    #[must_use]
    pub fn new(distribution: KindDistribution, matcher: PhraseMatcher, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            distribution,
            matcher,
            rng,
            last_id: 0,
        }
    }

    /// # Errors
    ///
    /// Returns `FeedError::InvalidConfig` if the weights or phrases are invalid.
    pub fn from_config(config: &FeedConfig) -> Result<Self> {
        Ok(Self::new(
            config.distribution()?,
            config.matcher()?,
            config.rng_seed,
        ))
    }

    #[must_use]
    pub const fn distribution(&self) -> &KindDistribution {
        &self.distribution
    }

    #[must_use]
    pub const fn matcher(&self) -> &PhraseMatcher {
        &self.matcher
    }

    /// Number of events built so far; also the id of the last one.
    #[must_use]
    pub const fn generated(&self) -> u64 {
        self.last_id
    }

    /// Builds the next event, with a kind drawn from the distribution.
    pub fn next_event<I: Copy>(&mut self, now: I) -> ActivityEvent<I> {
        let kind = self.distribution.sample(&mut self.rng);
        self.event_of_kind(kind, now)
    }

    /// Builds the next event with the given kind.
    pub fn event_of_kind<I: Copy>(&mut self, kind: EventKind, now: I) -> ActivityEvent<I> {
        let details = match kind {
            EventKind::Comment => self.comment_details(),
            EventKind::Message => EventDetails::Message {
                user: self.pick(&USERS).to_owned(),
                content: self.pick(&MESSAGE_CONTENTS).to_owned(),
            },
            EventKind::Response => EventDetails::Response {
                user: self.pick(&USERS).to_owned(),
                content: self.pick(&RESPONSE_CONTENTS).to_owned(),
            },
            EventKind::Scan => EventDetails::Scan {
                group: self.pick(&GROUPS).to_owned(),
                content: self.pick(&SCAN_CONTENTS).to_owned(),
            },
        };
        self.last_id += 1;
        ActivityEvent::new(EventId::new(self.last_id), now, details)
    }

    /// One sample event of each kind, aged 12, 8, 5 and 2 minutes, oldest first.
    ///
    /// An age that would reach back past the clock's origin is dropped and the
    /// event is stamped with `now`.
    pub fn seed_history<I: CheckedInstant>(&mut self, now: I) -> Vec<ActivityEvent<I>> {
        const MINUTE: Duration = Duration::from_secs(60);

        [
            (EventKind::Scan, 12_u32),
            (EventKind::Response, 8),
            (EventKind::Message, 5),
            (EventKind::Comment, 2),
        ]
        .into_iter()
        .map(|(kind, minutes)| {
            let timestamp = now.checked_earlier(MINUTE * minutes).unwrap_or(now);
            self.event_of_kind(kind, timestamp)
        })
        .collect()
    }

    fn comment_details(&mut self) -> EventDetails {
        let phrase = self.pick_phrase();
        let content = self.pick(&COMMENT_TEMPLATES).replace("{phrase}", &phrase);
        let matched_phrase = self
            .matcher
            .find(&content)
            .map_or(phrase, ToOwned::to_owned);

        EventDetails::Comment {
            group: self.pick(&GROUPS).to_owned(),
            user: self.pick(&USERS).to_owned(),
            content,
            matched_phrase,
        }
    }

    fn pick_phrase(&mut self) -> String {
        let phrases = self.matcher.phrases();
        let index = self.rng.random_range(0..phrases.len());
        phrases[index].clone()
    }

    fn pick(&mut self, pool: &[&'static str]) -> &'static str {
        pool[self.rng.random_range(0..pool.len())]
    }
}
