//! Notification screen tuning.

use embassy_time::Duration;
use platform::config::DISPLAY_WIDTH;
use thiserror_no_std::Error;

/// How long a preview stays up before it closes by itself.
pub const DEFAULT_PREVIEW_TIMEOUT: Duration = Duration::from_secs(7);

/// Length of the single buzz announcing a non-call notification.
pub const DEFAULT_BUZZ_MS: u8 = 35;

/// Rejected notification screen configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The countdown line needs at least one pixel.
    #[error("countdown line width must be non-zero")]
    ZeroWidth,
    /// Every pixel of the line must stand for at least one millisecond.
    #[error("preview timeout of {timeout_ms} ms is shorter than the {width_px} px countdown line")]
    TimeoutTooShort {
        /// Requested timeout.
        timeout_ms: u64,
        /// Requested line width.
        width_px: u32,
    },
}

/// Validated settings for the notification screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationsConfig {
    preview_timeout: Duration,
    countdown_width: u32,
    buzz_ms: u8,
}

impl NotificationsConfig {
    /// Build a configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroWidth`] for a zero-pixel line and
    /// [`ConfigError::TimeoutTooShort`] when `preview_timeout` would shrink
    /// the line by more than one pixel per millisecond.
    pub fn new(preview_timeout: Duration, countdown_width: u32) -> Result<Self, ConfigError> {
        if countdown_width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if preview_timeout.as_millis() < u64::from(countdown_width) {
            return Err(ConfigError::TimeoutTooShort {
                timeout_ms: preview_timeout.as_millis(),
                width_px: countdown_width,
            });
        }
        Ok(Self {
            preview_timeout,
            countdown_width,
            buzz_ms: DEFAULT_BUZZ_MS,
        })
    }

    /// Override the arrival buzz length.
    #[must_use]
    pub fn with_buzz_ms(mut self, buzz_ms: u8) -> Self {
        self.buzz_ms = buzz_ms;
        self
    }

    /// Preview auto-close delay.
    #[must_use]
    pub fn preview_timeout(&self) -> Duration {
        self.preview_timeout
    }

    /// Countdown line length at full time, in pixels.
    #[must_use]
    pub fn countdown_width(&self) -> u32 {
        self.countdown_width
    }

    /// Arrival buzz length in milliseconds.
    #[must_use]
    pub fn buzz_ms(&self) -> u8 {
        self.buzz_ms
    }
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            preview_timeout: DEFAULT_PREVIEW_TIMEOUT,
            countdown_width: DISPLAY_WIDTH,
            buzz_ms: DEFAULT_BUZZ_MS,
        }
    }
}
