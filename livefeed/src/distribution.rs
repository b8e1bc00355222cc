// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Weighted choice over the closed set of event kinds.

use crate::event::EventKind;
use livefeed_core::{FeedError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Relative weight of each event kind.
///
/// The default reproduces the classic feed: comments and scans with equal
/// probability, no messages or responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KindWeights {
    pub comment: u32,
    pub message: u32,
    pub response: u32,
    pub scan: u32,
}

impl KindWeights {
    /// Equal weight for every kind.
    #[must_use]
    pub const fn uniform() -> Self {
        Self {
            comment: 1,
            message: 1,
            response: 1,
            scan: 1,
        }
    }

    /// No weight on any kind; not a valid distribution on its own.
    pub const ZERO: Self = Self {
        comment: 0,
        message: 0,
        response: 0,
        scan: 0,
    };

    /// All weight on a single kind.
    #[must_use]
    pub const fn only(kind: EventKind) -> Self {
        match kind {
            EventKind::Comment => Self {
                comment: 1,
                ..Self::ZERO
            },
            EventKind::Message => Self {
                message: 1,
                ..Self::ZERO
            },
            EventKind::Response => Self {
                response: 1,
                ..Self::ZERO
            },
            EventKind::Scan => Self {
                scan: 1,
                ..Self::ZERO
            },
        }
    }

    #[must_use]
    pub const fn weight(&self, kind: EventKind) -> u32 {
        match kind {
            EventKind::Comment => self.comment,
            EventKind::Message => self.message,
            EventKind::Response => self.response,
            EventKind::Scan => self.scan,
        }
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.comment as u64 + self.message as u64 + self.response as u64 + self.scan as u64
    }
}

impl Default for KindWeights {
    fn default() -> Self {
        Self {
            comment: 1,
            message: 0,
            response: 0,
            scan: 1,
        }
    }
}

/// Validated distribution used by the generator to pick a kind per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindDistribution {
    weights: KindWeights,
    total: u64,
}

impl KindDistribution {
    /// # Errors
    ///
    /// Returns `FeedError::InvalidConfig` if every weight is zero.
    pub fn new(weights: KindWeights) -> Result<Self> {
        let total = weights.total();
        if total == 0 {
            return Err(FeedError::invalid_config(
                "kind weights must not all be zero",
            ));
        }
        Ok(Self { weights, total })
    }

    #[must_use]
    pub const fn weights(&self) -> KindWeights {
        self.weights
    }

    /// Whether `kind` can ever be produced.
    #[must_use]
    pub const fn can_produce(&self, kind: EventKind) -> bool {
        self.weights.weight(kind) > 0
    }

    /// Probability of `kind`, in `[0, 1]`.
    #[must_use]
    pub fn probability(&self, kind: EventKind) -> f64 {
        f64::from(self.weights.weight(kind)) / self.total as f64
    }

    /// Draws a kind with probability proportional to its weight.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> EventKind {
        let mut pick = rng.random_range(0..self.total);
        for kind in EventKind::ALL {
            let weight = u64::from(self.weights.weight(kind));
            if pick < weight {
                return kind;
            }
            pick -= weight;
        }
        // pick < total, so the loop always returns
        EventKind::Scan
    }
}

impl Default for KindDistribution {
    fn default() -> Self {
        Self {
            weights: KindWeights::default(),
            total: KindWeights::default().total(),
        }
    }
}
