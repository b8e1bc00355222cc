// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Simulated live activity feed.
//!
//! This crate provides a periodic generator of synthetic activity events and
//! the bounded, newest-first log it maintains for a display.
//!
//! # Overview
//!
//! - **[`ActivityFeedSimulator`]** - start/stop lifecycle, one event per interval,
//!   snapshot subscription
//! - **[`BoundedLog`]** - fixed-capacity ring buffer with drop-oldest eviction
//! - **[`ActivityEvent`]** / **[`EventKind`]** - immutable events with a strict
//!   per-kind field schema
//! - **[`KindDistribution`]** - configurable weighted choice of event kinds
//! - **[`PhraseMatcher`]** - monitored trigger phrases attached to comments
//! - **[`FeedConfig`]** - validated, JSON-loadable configuration
//! - **[`FeedStats`]** / **[`format_age`]** - counters and age labels for displays
//!
//! The simulator takes its clock as a [`Timer`](livefeed_runtime::Timer), so
//! tests can drive it deterministically with tokio's paused time.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

mod age;
mod bounded_log;
mod config;
mod distribution;
mod event;
mod generator;
mod phrases;
#[cfg(feature = "runtime-tokio")]
mod simulator;
mod stats;

pub mod prelude;

pub use age::format_age;
pub use bounded_log::{BoundedLog, DEFAULT_CAPACITY};
pub use config::{FeedConfig, DEFAULT_INTERVAL};
pub use distribution::{KindDistribution, KindWeights};
pub use event::{ActivityEvent, EventDetails, EventId, EventKind};
pub use generator::EventGenerator;
pub use livefeed_core::{FeedError, Result};
pub use livefeed_runtime::{CheckedInstant, Timer};
pub use phrases::{PhraseMatcher, DEFAULT_PHRASES};
pub use stats::FeedStats;

#[cfg(feature = "runtime-tokio")]
pub use livefeed_runtime::TokioTimer;
#[cfg(feature = "runtime-tokio")]
pub use simulator::{ActivityFeedSimulator, FeedSnapshot, SimulatorState, SnapshotStream};

/// Simulator driven by tokio's clock.
#[cfg(feature = "runtime-tokio")]
pub type TokioFeed = ActivityFeedSimulator<TokioTimer>;

/// Event stamped by tokio's clock.
#[cfg(feature = "runtime-tokio")]
pub type TokioActivityEvent = ActivityEvent<<TokioTimer as Timer>::Instant>;
