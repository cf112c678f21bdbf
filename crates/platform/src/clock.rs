//! Wall clock and countdown timer abstractions

use embassy_time::Duration;

/// Calendar time source.
pub trait WallClock {
    /// Current time in Unix seconds. `0` means the clock was never set.
    fn now_unix(&self) -> u64;
}

/// The user-facing countdown timer (the timer app).
pub trait CountdownTimer {
    /// Whether a countdown is in progress.
    fn is_running(&self) -> bool;

    /// Time left before the countdown fires.
    fn time_remaining(&self) -> Duration;
}
