// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Feed configuration.
//!
//! Every field has a default, so an empty JSON object is a valid document:
//!
//! ```
//! use livefeed::FeedConfig;
//! use std::time::Duration;
//!
//! let config = FeedConfig::from_json(r#"{ "interval_ms": 500, "capacity": 5 }"#).unwrap();
//! assert_eq!(config.interval, Duration::from_millis(500));
//! assert_eq!(config.capacity, 5);
//! assert_eq!(FeedConfig::from_json("{}").unwrap(), FeedConfig::default());
//! ```

use crate::bounded_log::DEFAULT_CAPACITY;
use crate::distribution::{KindDistribution, KindWeights};
use crate::phrases::{PhraseMatcher, DEFAULT_PHRASES};
use core::time::Duration;
use livefeed_core::{FeedError, Result, ResultExt};
use serde::{Deserialize, Serialize};

/// Time between two ticks unless configured otherwise.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeedConfig {
    /// Time between two ticks while running.
    #[serde(rename = "interval_ms", with = "duration_ms")]
    pub interval: Duration,

    /// Maximum number of retained events.
    pub capacity: usize,

    /// Relative weight of each event kind.
    pub weights: KindWeights,

    /// Phrases attached to comment events.
    pub phrases: Vec<String>,

    /// Seed for reproducible event content; `None` seeds from the OS.
    pub rng_seed: Option<u64>,

    /// Prefill the log with one sample event of each kind.
    pub seed_history: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            capacity: DEFAULT_CAPACITY,
            weights: KindWeights::default(),
            phrases: DEFAULT_PHRASES.iter().map(|p| (*p).to_owned()).collect(),
            rng_seed: None,
            seed_history: false,
        }
    }
}

impl FeedConfig {
    /// Parses and validates a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::InvalidConfig` if the document does not parse or
    /// does not pass [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).config_context("feed config")?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can drive a feed.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::InvalidConfig` for a zero interval, a zero capacity,
    /// all-zero kind weights, or no non-blank phrase.
    pub fn validate(&self) -> Result<()> {
        if self.interval.is_zero() {
            return Err(FeedError::invalid_config("interval must be positive"));
        }
        if self.capacity == 0 {
            return Err(FeedError::invalid_config("capacity must be positive"));
        }
        self.distribution()?;
        self.matcher()?;
        Ok(())
    }

    /// The kind distribution described by `weights`.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::InvalidConfig` if every weight is zero.
    pub fn distribution(&self) -> Result<KindDistribution> {
        KindDistribution::new(self.weights)
    }

    /// The phrase matcher described by `phrases`.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::InvalidConfig` if no non-blank phrase is configured.
    pub fn matcher(&self) -> Result<PhraseMatcher> {
        PhraseMatcher::new(&self.phrases)
    }

    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    #[must_use]
    pub fn with_weights(mut self, weights: KindWeights) -> Self {
        self.weights = weights;
        self
    }

    #[must_use]
    pub fn with_phrases<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.phrases = phrases.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_seed_history(mut self, enabled: bool) -> Self {
        self.seed_history = enabled;
        self
    }
}

mod duration_ms {
    use core::time::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
