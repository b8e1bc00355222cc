// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Activity events and their closed set of kinds.
//!
//! Every kind carries a fixed set of descriptive fields:
//!
//! | kind       | group | user | content | matched phrase |
//! |------------|-------|------|---------|----------------|
//! | `Comment`  | yes   | yes  | yes     | yes            |
//! | `Message`  |       | yes  | yes     |                |
//! | `Response` |       | yes  | yes     |                |
//! | `Scan`     | yes   |      | yes     |                |
//!
//! The schema lives in [`EventDetails`]; the `Option` accessors on
//! [`ActivityEvent`] let displays treat all kinds uniformly.

use core::fmt;
use core::ops::Sub;
use core::time::Duration;

/// Closed category tag of an activity event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    /// A comment containing a monitored phrase was found in a group.
    Comment,
    /// A message was sent to a user.
    Message,
    /// A user replied to a message.
    Response,
    /// A group was scanned.
    Scan,
}

impl EventKind {
    /// All kinds, in declaration order.
    pub const ALL: [EventKind; 4] = [
        EventKind::Comment,
        EventKind::Message,
        EventKind::Response,
        EventKind::Scan,
    ];

    /// Lowercase tag, as used in configuration documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::Message => "message",
            Self::Response => "response",
            Self::Scan => "scan",
        }
    }

    /// Short headline shown above an event in a feed.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Comment => "New comment found",
            Self::Message => "Message sent",
            Self::Response => "Response received",
            Self::Scan => "Group scan",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier of an event, unique and increasing within one feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(u64);

impl EventId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Kind-specific payload of an [`ActivityEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDetails {
    Comment {
        group: String,
        user: String,
        content: String,
        matched_phrase: String,
    },
    Message {
        user: String,
        content: String,
    },
    Response {
        user: String,
        content: String,
    },
    Scan {
        group: String,
        content: String,
    },
}

impl EventDetails {
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Comment { .. } => EventKind::Comment,
            Self::Message { .. } => EventKind::Message,
            Self::Response { .. } => EventKind::Response,
            Self::Scan { .. } => EventKind::Scan,
        }
    }

    #[must_use]
    pub fn group(&self) -> Option<&str> {
        match self {
            Self::Comment { group, .. } | Self::Scan { group, .. } => Some(group.as_str()),
            Self::Message { .. } | Self::Response { .. } => None,
        }
    }

    #[must_use]
    pub fn user(&self) -> Option<&str> {
        match self {
            Self::Comment { user, .. }
            | Self::Message { user, .. }
            | Self::Response { user, .. } => Some(user.as_str()),
            Self::Scan { .. } => None,
        }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Self::Comment { content, .. }
            | Self::Message { content, .. }
            | Self::Response { content, .. }
            | Self::Scan { content, .. } => content.as_str(),
        }
    }

    #[must_use]
    pub fn matched_phrase(&self) -> Option<&str> {
        match self {
            Self::Comment { matched_phrase, .. } => Some(matched_phrase.as_str()),
            _ => None,
        }
    }
}

/// One entry of the activity feed.
///
/// Events are immutable: all fields are set at construction and only exposed
/// through accessors. `I` is the instant type of the clock that stamped the
/// event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEvent<I> {
    id: EventId,
    timestamp: I,
    details: EventDetails,
}

impl<I: Copy> ActivityEvent<I> {
    #[must_use]
    pub fn new(id: EventId, timestamp: I, details: EventDetails) -> Self {
        Self {
            id,
            timestamp,
            details,
        }
    }

    #[must_use]
    pub const fn id(&self) -> EventId {
        self.id
    }

    #[must_use]
    pub const fn kind(&self) -> EventKind {
        self.details.kind()
    }

    #[must_use]
    pub fn timestamp(&self) -> I {
        self.timestamp
    }

    #[must_use]
    pub const fn details(&self) -> &EventDetails {
        &self.details
    }

    #[must_use]
    pub fn group(&self) -> Option<&str> {
        self.details.group()
    }

    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.details.user()
    }

    #[must_use]
    pub fn content(&self) -> &str {
        self.details.content()
    }

    #[must_use]
    pub fn matched_phrase(&self) -> Option<&str> {
        self.details.matched_phrase()
    }

    /// Time elapsed since the event was stamped, zero if `now` is earlier.
    #[must_use]
    pub fn age(&self, now: I) -> Duration
    where
        I: Ord + Sub<I, Output = Duration>,
    {
        if now > self.timestamp {
            now - self.timestamp
        } else {
            Duration::ZERO
        }
    }
}
