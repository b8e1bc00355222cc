// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod cancellation_token;
pub mod error;
pub mod feed_subject;
pub mod feed_task;

pub use self::cancellation_token::CancellationToken;
pub use self::error::{FeedError, Result, ResultExt};
pub use self::feed_subject::{FeedSubject, SubjectBoxStream};
pub use self::feed_task::FeedTask;
