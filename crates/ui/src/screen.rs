//! Screen identifiers, repaint hints, and the contract every screen fulfils.

use embassy_time::Instant;
use platform::TouchEvent;

/// Every top-level screen the navigator can push onto its stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Watch face (root).
    Clock,
    /// Notification carousel opened by the user.
    Notifications,
    /// Full-screen alert shown when a notification arrives.
    NotificationPreview,
}

impl Screen {
    /// Repaint animation used when this screen is closed.
    #[must_use]
    pub const fn return_direction(self) -> RefreshDirection {
        match self {
            Screen::Clock => RefreshDirection::None,
            Screen::Notifications | Screen::NotificationPreview => RefreshDirection::Up,
        }
    }
}

/// Full-repaint hint, telling the display task which way to slide the next
/// frame in so that the animation follows the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RefreshDirection {
    /// Repaint in place.
    None,
    /// New content slides up (from below).
    Up,
    /// New content slides down (from above).
    Down,
    /// New content slides to the left.
    Left,
    /// New content slides to the right.
    Right,
    /// Animated slide to the right (dismiss to black).
    RightAnim,
}

/// What the host needs from a running screen.
///
/// The host forwards gestures, calls [`refresh`](Self::refresh) once per
/// display period, collects repaint hints and closes the screen once
/// [`is_running`](Self::is_running) turns false.
pub trait ScreenTask {
    /// Handle a gesture. Returns `false` when the gesture was not consumed
    /// and the host may apply its default behaviour.
    fn on_touch_event(&mut self, event: TouchEvent) -> bool;

    /// Periodic tick.
    fn refresh(&mut self, now: Instant);

    /// Whether the screen wants to stay open.
    fn is_running(&self) -> bool;

    /// Take the pending full-repaint hint, if any.
    fn take_full_refresh(&mut self) -> Option<RefreshDirection>;
}
