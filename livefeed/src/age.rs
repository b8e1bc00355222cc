// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Coarse relative-age labels for feed entries.

use core::time::Duration;

/// Formats an elapsed duration the way a feed labels its entries.
///
/// Under a minute is `"just now"`, under an hour is `"{m} min ago"`, anything
/// longer is `"{h}h ago"`. Both units are rounded down.
///
/// ```
/// use livefeed::format_age;
/// use std::time::Duration;
///
/// assert_eq!(format_age(Duration::from_secs(59)), "just now");
/// assert_eq!(format_age(Duration::from_secs(5 * 60)), "5 min ago");
/// assert_eq!(format_age(Duration::from_secs(2 * 3600 + 59 * 60)), "2h ago");
/// ```
#[must_use]
pub fn format_age(elapsed: Duration) -> String {
    let minutes = elapsed.as_secs() / 60;
    if minutes < 1 {
        return "just now".to_owned();
    }
    if minutes < 60 {
        return format!("{minutes} min ago");
    }
    format!("{}h ago", minutes / 60)
}
