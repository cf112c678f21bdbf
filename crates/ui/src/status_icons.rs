//! Status bar: countdown timer, charger plug, battery gauge and BLE icon.
//!
//! Each input is change-tracked with a [`DirtyValue`], so a signal that did
//! not move since the previous [`StatusIcons::update`] leaves its icon alone.

use core::fmt::Write as _;

use heapless::String;
use platform::{BleStatus, CountdownTimer, PowerMonitor};

use crate::dirty::DirtyValue;

/// Height of the battery gauge interior in pixels.
pub const BATTERY_JUICE_MAX_HEIGHT: u32 = 14;

/// Charge level bands of the battery gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatteryLevel {
    /// Above 15 %.
    Normal,
    /// 6 to 15 %.
    Low,
    /// 5 % and below.
    Critical,
}

/// Battery gauge state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatteryIcon {
    percent: u8,
}

impl BatteryIcon {
    /// Gauge showing `percent` (clamped to 100).
    #[must_use]
    pub fn new(percent: u8) -> Self {
        Self {
            percent: percent.min(100),
        }
    }

    /// Charge shown, 0..=100.
    #[must_use]
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Filled height of the gauge in pixels.
    #[must_use]
    pub fn juice_height(&self) -> u32 {
        u32::from(self.percent)
            .saturating_mul(BATTERY_JUICE_MAX_HEIGHT)
            .checked_div(100)
            .unwrap_or(0)
    }

    /// Colour band of the gauge.
    #[must_use]
    pub fn level(&self) -> BatteryLevel {
        match self.percent {
            0..=5 => BatteryLevel::Critical,
            6..=15 => BatteryLevel::Low,
            _ => BatteryLevel::Normal,
        }
    }
}

/// Status icon widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusIcons {
    timer_seconds: DirtyValue<Option<u64>>,
    power_present: DirtyValue<bool>,
    battery_percent: DirtyValue<u8>,
    ble_radio_enabled: DirtyValue<bool>,
    ble_connected: DirtyValue<bool>,

    timer_text: Option<String<8>>,
    plug_visible: bool,
    battery: BatteryIcon,
    ble_visible: bool,
    ble_connected_color: bool,
}

impl StatusIcons {
    /// Widget with every icon hidden; the first [`update`](Self::update)
    /// paints all of them.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timer_seconds: DirtyValue::new(None),
            power_present: DirtyValue::new(false),
            battery_percent: DirtyValue::new(0),
            ble_radio_enabled: DirtyValue::new(false),
            ble_connected: DirtyValue::new(false),
            timer_text: None,
            plug_visible: false,
            battery: BatteryIcon::default(),
            ble_visible: false,
            ble_connected_color: false,
        }
    }

    /// Sample the inputs and update the icons whose input changed.
    ///
    /// Returns `true` when anything visible changed.
    pub fn update(
        &mut self,
        power: &dyn PowerMonitor,
        ble: &dyn BleStatus,
        timer: &dyn CountdownTimer,
    ) -> bool {
        let mut changed = false;

        let seconds = timer
            .is_running()
            .then(|| timer.time_remaining().as_secs());
        self.timer_seconds.set(seconds);
        if self.timer_seconds.is_updated() {
            self.timer_text = self.timer_seconds.get().map(format_timer);
            changed = true;
        }

        self.power_present.set(power.is_power_present());
        if self.power_present.is_updated() {
            self.plug_visible = self.power_present.get();
            changed = true;
        }

        self.battery_percent.set(power.battery_percentage());
        if self.battery_percent.is_updated() {
            self.battery = BatteryIcon::new(self.battery_percent.get());
            changed = true;
        }

        self.ble_radio_enabled.set(ble.is_radio_enabled());
        if self.ble_radio_enabled.is_updated() {
            self.ble_visible = self.ble_radio_enabled.get();
            changed = true;
        }

        self.ble_connected.set(ble.is_connected());
        if self.ble_connected.is_updated() {
            self.ble_connected_color = self.ble_connected.get();
            changed = true;
        }

        changed
    }

    /// Remaining timer time as `MM:SS`, while a timer runs.
    #[must_use]
    pub fn timer_text(&self) -> Option<&str> {
        self.timer_text.as_deref()
    }

    /// Whether the charger plug is shown.
    #[must_use]
    pub fn plug_visible(&self) -> bool {
        self.plug_visible
    }

    /// Battery gauge.
    #[must_use]
    pub fn battery(&self) -> BatteryIcon {
        self.battery
    }

    /// Whether the BLE icon is shown (radio enabled).
    #[must_use]
    pub fn ble_visible(&self) -> bool {
        self.ble_visible
    }

    /// Whether the BLE icon uses the "connected" colour.
    #[must_use]
    pub fn ble_connected(&self) -> bool {
        self.ble_connected_color
    }
}

impl Default for StatusIcons {
    fn default() -> Self {
        Self::new()
    }
}

/// `MM:SS`, minutes capped at 99.
fn format_timer(total_seconds: u64) -> String<8> {
    let minutes = (total_seconds / 60).min(99);
    let seconds = total_seconds % 60;
    let mut s = String::new();
    write!(s, "{minutes:02}:{seconds:02}").ok();
    s
}
