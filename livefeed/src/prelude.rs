// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Commonly used types, for glob import.

pub use crate::{
    format_age, ActivityEvent, BoundedLog, EventKind, FeedConfig, FeedError, FeedStats,
    KindWeights, PhraseMatcher, Timer,
};

#[cfg(feature = "runtime-tokio")]
pub use crate::{ActivityFeedSimulator, SimulatorState, TokioFeed, TokioTimer};
