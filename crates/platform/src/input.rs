//! Input device abstraction

/// Input device trait for the touch panel
pub trait InputDevice {
    /// Wait for next gesture (async, power-efficient)
    fn wait_for_event(&mut self) -> impl core::future::Future<Output = TouchEvent>;

    /// Poll for gesture (non-blocking)
    fn poll_event(&mut self) -> Option<TouchEvent>;
}

/// Gestures reported by the touch controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchEvent {
    /// No gesture recognised
    None,
    /// Single short touch
    Tap,
    /// Finger moved right to left
    SwipeLeft,
    /// Finger moved left to right
    SwipeRight,
    /// Finger moved bottom to top
    SwipeUp,
    /// Finger moved top to bottom
    SwipeDown,
    /// Touch held for extended period
    LongTap,
    /// Two taps in quick succession
    DoubleTap,
}
