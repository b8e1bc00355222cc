// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::event::{ActivityEvent, EventKind};

/// Live counters of a feed.
///
/// Per-kind counts cover the retained events only; `emitted` and `evicted`
/// count over the lifetime of the feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedStats {
    pub comments: usize,
    pub messages: usize,
    pub responses: usize,
    pub scans: usize,
    /// Events currently in the log.
    pub retained: usize,
    /// Events produced by ticks, excluding seeded history.
    pub emitted: u64,
    /// Events dropped from the tail of the log.
    pub evicted: u64,
}

impl FeedStats {
    /// Counts the kinds in `events` and attaches the lifetime counters.
    pub fn collect<'a, I, T>(events: I, emitted: u64, evicted: u64) -> Self
    where
        I: IntoIterator<Item = &'a ActivityEvent<T>>,
        T: Copy + 'a,
    {
        let mut stats = Self {
            emitted,
            evicted,
            ..Self::default()
        };
        for event in events {
            stats.retained += 1;
            match event.kind() {
                EventKind::Comment => stats.comments += 1,
                EventKind::Message => stats.messages += 1,
                EventKind::Response => stats.responses += 1,
                EventKind::Scan => stats.scans += 1,
            }
        }
        stats
    }

    #[must_use]
    pub const fn count(&self, kind: EventKind) -> usize {
        match kind {
            EventKind::Comment => self.comments,
            EventKind::Message => self.messages,
            EventKind::Response => self.responses,
            EventKind::Scan => self.scans,
        }
    }
}
