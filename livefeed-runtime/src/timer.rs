// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::instant::CheckedInstant;
use core::fmt::Debug;
use core::future::Future;
use core::ops::{Add, Sub};
use core::time::Duration;

pub trait Timer: Clone + Send + Sync + Debug + 'static {
    type Sleep: Future<Output = ()> + Send;

    type Instant: Copy
        + Debug
        + Ord
        + Send
        + Sync
        + 'static
        + CheckedInstant
        + Add<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;

    /// Creates a future that completes after `duration`.
    fn sleep_future(&self, duration: Duration) -> Self::Sleep;

    /// Returns the current instant.
    fn now(&self) -> Self::Instant;

    /// Time elapsed from `earlier` to `later`, zero if `later` is not after it.
    fn saturating_elapsed(earlier: Self::Instant, later: Self::Instant) -> Duration {
        if later > earlier {
            later - earlier
        } else {
            Duration::ZERO
        }
    }
}
