//! Shrinking countdown line shown under a notification preview.
//!
//! Polled once per refresh: the line length is recomputed from the time
//! elapsed since the preview opened. There is no timer callback.

use embassy_time::{Duration, Instant};

/// Linear countdown mapping elapsed time to a horizontal extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    started: Instant,
    width: u32,
    ms_per_px: u64,
}

impl Countdown {
    /// Start a countdown of `timeout` drawn over `width` pixels.
    ///
    /// Each pixel stands for `timeout / width` whole milliseconds (at least
    /// one), so the line reaches zero no later than `timeout`.
    #[must_use]
    pub fn start(now: Instant, timeout: Duration, width: u32) -> Self {
        let ms_per_px = timeout
            .as_millis()
            .checked_div(u64::from(width))
            .unwrap_or(0)
            .max(1);
        Self {
            started: now,
            width,
            ms_per_px,
        }
    }

    /// Remaining extent in pixels at `now`; zero or negative once expired.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> i64 {
        let elapsed = now.saturating_duration_since(self.started).as_millis();
        let consumed = elapsed.checked_div(self.ms_per_px).unwrap_or(0);
        i64::from(self.width).saturating_sub(i64::try_from(consumed).unwrap_or(i64::MAX))
    }

    /// Whether the countdown ran out at `now`.
    #[must_use]
    pub fn expired(&self, now: Instant) -> bool {
        self.remaining(now) <= 0
    }

    /// Full line length.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }
}
