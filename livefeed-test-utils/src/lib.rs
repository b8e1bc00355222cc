// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the livefeed workspace.
//!
//! This crate is meant for development and testing only.
//!
//! # Module Organization
//!
//! - `fixtures` - hand-built events and reproducible configurations
//! - `helpers` - paused-clock stepping and stream assertions
//!
//! # Example
//!
//! ```rust
//! use livefeed::{ActivityFeedSimulator, TokioTimer};
//! use livefeed_test_utils::{fixtures::seeded_config, helpers::{advance_intervals, ids}};
//!
//! # #[tokio::main(flavor = "current_thread", start_paused = true)]
//! # async fn main() {
//! let config = seeded_config();
//! let interval = config.interval;
//! let feed = ActivityFeedSimulator::launch(config, TokioTimer).unwrap();
//!
//! advance_intervals(3, interval).await;
//! assert_eq!(ids(&feed.snapshot()), vec![3, 2, 1]);
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod fixtures;
pub mod helpers;

pub use helpers::{advance_intervals, assert_no_element_emitted, settle, unwrap_stream};
