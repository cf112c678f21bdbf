//! Mock implementations for testing
//!
//! This module provides mock implementations of all platform traits
//! for use in unit and integration tests.
//!
//! Side-effecting mocks (motor, sleep, telephony) append to one shared
//! [`CommandLog`], so tests can assert the order in which a screen talks to
//! independent controllers.

#![cfg(any(test, feature = "std"))]

use core::cell::{Cell, RefCell};

use embassy_time::Duration;

use crate::*;

/// Capacity of a [`CommandLog`]; further commands are dropped.
pub const COMMAND_LOG_DEPTH: usize = 64;

/// A side effect observed by a mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `Haptics::start_ringing`
    StartRinging,
    /// `Haptics::run_for_duration`
    RunForDuration(u8),
    /// `Haptics::stop_ringing`
    StopRinging,
    /// `SleepInhibitor::disable_sleeping`
    DisableSleeping,
    /// `SleepInhibitor::enable_sleeping`
    EnableSleeping,
    /// `CallControl::accept_incoming_call`
    AcceptCall,
    /// `CallControl::reject_incoming_call`
    RejectCall,
    /// `CallControl::mute_incoming_call`
    MuteCall,
}

/// Ordered record of commands shared between mocks.
#[derive(Default)]
pub struct CommandLog {
    entries: RefCell<heapless::Vec<Command, COMMAND_LOG_DEPTH>>,
}

impl CommandLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command (silently dropped when the log is full)
    pub fn record(&self, command: Command) {
        self.entries.borrow_mut().push(command).ok();
    }

    /// Snapshot of every recorded command, oldest first
    pub fn entries(&self) -> heapless::Vec<Command, COMMAND_LOG_DEPTH> {
        self.entries.borrow().clone()
    }

    /// Number of times `command` was recorded
    pub fn count(&self, command: Command) -> usize {
        self.entries.borrow().iter().filter(|c| **c == command).count()
    }

    /// Position of the first occurrence of `command`
    pub fn position(&self, command: Command) -> Option<usize> {
        self.entries.borrow().iter().position(|c| *c == command)
    }

    /// Position of the last occurrence of `command`
    pub fn last_position(&self, command: Command) -> Option<usize> {
        self.entries.borrow().iter().rposition(|c| *c == command)
    }

    /// Forget every recorded command
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

/// Mock vibration motor
pub struct MockHaptics<'a> {
    log: &'a CommandLog,
    ringing: bool,
}

impl<'a> MockHaptics<'a> {
    /// Create new mock motor
    pub fn new(log: &'a CommandLog) -> Self {
        Self { log, ringing: false }
    }

    /// Check if the ring pattern is active
    pub fn is_ringing(&self) -> bool {
        self.ringing
    }
}

impl Haptics for MockHaptics<'_> {
    fn start_ringing(&mut self) {
        self.ringing = true;
        self.log.record(Command::StartRinging);
    }

    fn run_for_duration(&mut self, duration_ms: u8) {
        self.log.record(Command::RunForDuration(duration_ms));
    }

    fn stop_ringing(&mut self) {
        self.ringing = false;
        self.log.record(Command::StopRinging);
    }
}

/// Mock sleep switch
pub struct MockSleep<'a> {
    log: &'a CommandLog,
    gate: SleepGate,
}

impl<'a> MockSleep<'a> {
    /// Create new mock sleep switch (sleeping allowed)
    pub fn new(log: &'a CommandLog) -> Self {
        Self {
            log,
            gate: SleepGate::new(),
        }
    }

    /// Whether sleeping is currently allowed
    pub fn sleep_allowed(&self) -> bool {
        self.gate.sleep_allowed()
    }
}

impl SleepInhibitor for MockSleep<'_> {
    fn disable_sleeping(&mut self) {
        self.gate.disable_sleeping();
        self.log.record(Command::DisableSleeping);
    }

    fn enable_sleeping(&mut self) {
        self.gate.enable_sleeping();
        self.log.record(Command::EnableSleeping);
    }
}

/// Mock telephony link
pub struct MockCalls<'a> {
    log: &'a CommandLog,
}

impl<'a> MockCalls<'a> {
    /// Create new mock telephony link
    pub fn new(log: &'a CommandLog) -> Self {
        Self { log }
    }
}

impl CallControl for MockCalls<'_> {
    fn accept_incoming_call(&mut self) {
        self.log.record(Command::AcceptCall);
    }

    fn reject_incoming_call(&mut self) {
        self.log.record(Command::RejectCall);
    }

    fn mute_incoming_call(&mut self) {
        self.log.record(Command::MuteCall);
    }
}

/// Mock wall clock, settable from tests
#[derive(Default)]
pub struct MockClock {
    now: Cell<u64>,
}

impl MockClock {
    /// Create a clock reading `now_unix`
    pub fn new(now_unix: u64) -> Self {
        Self {
            now: Cell::new(now_unix),
        }
    }

    /// Set the current time
    pub fn set(&self, now_unix: u64) {
        self.now.set(now_unix);
    }
}

impl WallClock for MockClock {
    fn now_unix(&self) -> u64 {
        self.now.get()
    }
}

/// Mock battery gauge
pub struct MockPower {
    /// Reported charge (0-100)
    pub percentage: u8,
    /// Reported charger presence
    pub power_present: bool,
}

impl MockPower {
    /// Create new mock gauge
    pub fn new(percentage: u8, power_present: bool) -> Self {
        Self {
            percentage,
            power_present,
        }
    }
}

impl PowerMonitor for MockPower {
    fn battery_percentage(&self) -> u8 {
        self.percentage
    }

    fn is_power_present(&self) -> bool {
        self.power_present
    }
}

/// Mock BLE status
pub struct MockBle {
    /// Reported connection state
    pub connected: bool,
    /// Reported radio state
    pub radio_enabled: bool,
}

impl MockBle {
    /// Create new mock BLE status
    pub fn new(connected: bool, radio_enabled: bool) -> Self {
        Self {
            connected,
            radio_enabled,
        }
    }
}

impl BleStatus for MockBle {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn is_radio_enabled(&self) -> bool {
        self.radio_enabled
    }
}

/// Mock countdown timer
pub struct MockTimer {
    /// `None` when the timer is stopped
    pub remaining: Option<Duration>,
}

impl MockTimer {
    /// A stopped timer
    pub fn stopped() -> Self {
        Self { remaining: None }
    }

    /// A timer with `remaining` left
    pub fn running(remaining: Duration) -> Self {
        Self {
            remaining: Some(remaining),
        }
    }
}

impl CountdownTimer for MockTimer {
    fn is_running(&self) -> bool {
        self.remaining.is_some()
    }

    fn time_remaining(&self) -> Duration {
        self.remaining.unwrap_or(Duration::from_ticks(0))
    }
}

/// Mock touch panel
pub struct MockInput {
    events: heapless::Deque<TouchEvent, 16>,
}

impl MockInput {
    /// Create new mock input
    pub fn new() -> Self {
        Self {
            events: heapless::Deque::new(),
        }
    }

    /// Add event to queue
    pub fn add_event(&mut self, event: TouchEvent) -> Result<(), TouchEvent> {
        self.events.push_back(event)
    }

    /// Clear all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Default for MockInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputDevice for MockInput {
    async fn wait_for_event(&mut self) -> TouchEvent {
        loop {
            if let Some(event) = self.events.pop_front() {
                return event;
            }
            embassy_time::Timer::after_millis(10).await;
        }
    }

    fn poll_event(&mut self) -> Option<TouchEvent> {
        self.events.pop_front()
    }
}
