//! Power management abstraction
//!
//! Provides the display sleep toggle and battery state queries.

/// Process-wide switch keeping the display awake.
///
/// Screens call [`disable_sleeping`](Self::disable_sleeping) while they must
/// stay visible (a notification preview) and
/// [`enable_sleeping`](Self::enable_sleeping) when they are done.
pub trait SleepInhibitor {
    /// Prevent the display from going to sleep.
    fn disable_sleeping(&mut self);

    /// Allow the display to go to sleep again.
    fn enable_sleeping(&mut self);
}

/// Idempotent [`SleepInhibitor`]: the last call wins.
///
/// Repeated `enable_sleeping` calls (the preview acknowledges and later
/// closes) leave sleeping allowed exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepGate {
    sleep_allowed: bool,
}

impl SleepGate {
    /// Create a gate with sleeping allowed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sleep_allowed: true,
        }
    }

    /// Whether the scheduler may put the display to sleep.
    #[must_use]
    pub const fn sleep_allowed(&self) -> bool {
        self.sleep_allowed
    }
}

impl Default for SleepGate {
    fn default() -> Self {
        Self::new()
    }
}

impl SleepInhibitor for SleepGate {
    fn disable_sleeping(&mut self) {
        self.sleep_allowed = false;
    }

    fn enable_sleeping(&mut self) {
        self.sleep_allowed = true;
    }
}

/// Power state monitor
pub trait PowerMonitor {
    /// Get battery percentage (0-100)
    fn battery_percentage(&self) -> u8;

    /// Check if external power (charger cradle) is present
    fn is_power_present(&self) -> bool;
}
