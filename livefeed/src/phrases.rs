// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Monitored trigger phrases and matching against comment content.
//!
//! Matching is case-insensitive and word-bounded: `"pm"` matches
//! `"PM me please"` but not `"upmarket"`. When several monitored phrases occur
//! in the same content, the longest one wins; ties go to the phrase listed
//! first.

use livefeed_core::{FeedError, Result};

/// Phrases monitored when no explicit list is configured.
pub const DEFAULT_PHRASES: [&str; 5] = [
    "dm me",
    "i'm interested",
    "pm",
    "tell me more",
    "info dm",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseMatcher {
    phrases: Vec<String>,
    lowered: Vec<String>,
}

impl PhraseMatcher {
    /// Builds a matcher from `phrases`, trimming each one and skipping blanks.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::InvalidConfig` if no non-blank phrase remains.
    pub fn new<I, S>(phrases: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases: Vec<String> = phrases
            .into_iter()
            .map(|phrase| phrase.as_ref().trim().to_owned())
            .filter(|phrase| !phrase.is_empty())
            .collect();

        if phrases.is_empty() {
            return Err(FeedError::invalid_config(
                "at least one monitored phrase is required",
            ));
        }

        let lowered = phrases.iter().map(|phrase| phrase.to_lowercase()).collect();
        Ok(Self { phrases, lowered })
    }

    /// Parses newline-separated phrases, one per line.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::InvalidConfig` if every line is blank.
    pub fn parse(text: &str) -> Result<Self> {
        Self::new(text.lines())
    }

    /// Monitored phrases, trimmed, in configured order.
    #[must_use]
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    /// The monitored phrase found in `content`, if any.
    #[must_use]
    pub fn find(&self, content: &str) -> Option<&str> {
        let haystack = content.to_lowercase();
        let mut best: Option<usize> = None;

        for (index, needle) in self.lowered.iter().enumerate() {
            if !contains_word(&haystack, needle) {
                continue;
            }
            let longer = best.is_none_or(|current| needle.len() > self.lowered[current].len());
            if longer {
                best = Some(index);
            }
        }

        best.map(|index| self.phrases[index].as_str())
    }

    #[must_use]
    pub fn matches(&self, content: &str) -> bool {
        self.find(content).is_some()
    }
}

impl Default for PhraseMatcher {
    fn default() -> Self {
        let phrases: Vec<String> = DEFAULT_PHRASES.iter().map(|p| (*p).to_owned()).collect();
        let lowered = phrases.clone();
        Self { phrases, lowered }
    }
}

fn contains_word(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(start, _)| {
        let end = start + needle.len();
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
