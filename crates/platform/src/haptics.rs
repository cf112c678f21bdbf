//! Vibration motor abstraction
//!
//! Commands are fire-and-forget: the motor controller runs its own timers,
//! callers never wait for a pattern to finish.

/// Vibration motor interface
pub trait Haptics {
    /// Start the repeating ring pattern (incoming call).
    fn start_ringing(&mut self);

    /// Buzz once for `duration_ms` milliseconds.
    fn run_for_duration(&mut self, duration_ms: u8);

    /// Stop any vibration immediately, ringing included.
    fn stop_ringing(&mut self);
}
