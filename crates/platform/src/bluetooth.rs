//! Bluetooth abstraction

/// Connection status of the BLE stack
pub trait BleStatus {
    /// Check if a phone is connected
    fn is_connected(&self) -> bool;

    /// Check if the radio is switched on
    fn is_radio_enabled(&self) -> bool;
}

/// Telephony actions forwarded to the connected phone.
pub trait CallControl {
    /// Pick up the ringing call.
    fn accept_incoming_call(&mut self);

    /// Hang up the ringing call.
    fn reject_incoming_call(&mut self);

    /// Silence the ringer on the phone.
    fn mute_incoming_call(&mut self);
}
