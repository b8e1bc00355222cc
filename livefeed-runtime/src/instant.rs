// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::time::Duration;

/// Instants that can be moved back in time without panicking.
///
/// Monotonic clocks start at an unspecified origin, often close to boot time,
/// so an instant a few minutes in the past may not be representable.
///
/// ```
/// use livefeed_runtime::CheckedInstant;
/// use std::time::Duration;
///
/// let now = Duration::from_secs(60);
/// assert_eq!(now.checked_earlier(Duration::from_secs(10)), Some(Duration::from_secs(50)));
/// assert_eq!(now.checked_earlier(Duration::from_secs(120)), None);
/// ```
pub trait CheckedInstant: Copy {
    /// The instant `duration` before `self`, or `None` if it precedes the
    /// clock's origin.
    fn checked_earlier(self, duration: Duration) -> Option<Self>;
}

impl CheckedInstant for std::time::Instant {
    fn checked_earlier(self, duration: Duration) -> Option<Self> {
        self.checked_sub(duration)
    }
}

// Offset-from-origin clocks, as used by hand-driven timers
impl CheckedInstant for Duration {
    fn checked_earlier(self, duration: Duration) -> Option<Self> {
        self.checked_sub(duration)
    }
}

#[cfg(feature = "runtime-tokio")]
impl CheckedInstant for tokio::time::Instant {
    fn checked_earlier(self, duration: Duration) -> Option<Self> {
        self.checked_sub(duration)
    }
}
