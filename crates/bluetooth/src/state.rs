//! Bluetooth connection state tracker.

use platform::BleStatus;

/// Tracks the radio switch and, when a phone is connected, its address.
pub struct BluetoothState {
    radio_enabled: bool,
    connected: bool,
    peer_address: Option<[u8; 6]>,
}

impl BluetoothState {
    /// Create a new, disconnected state with the radio on.
    pub fn new() -> Self {
        BluetoothState {
            radio_enabled: true,
            connected: false,
            peer_address: None,
        }
    }

    /// Record a successful connection from `address`.
    pub fn on_connected(&mut self, address: [u8; 6]) {
        self.connected = true;
        self.peer_address = Some(address);
    }

    /// Record that the peer has disconnected.
    pub fn on_disconnected(&mut self) {
        self.connected = false;
        self.peer_address = None;
    }

    /// Switch the radio on or off. Switching off drops the connection.
    pub fn set_radio_enabled(&mut self, enabled: bool) {
        self.radio_enabled = enabled;
        if !enabled {
            self.on_disconnected();
        }
    }

    /// Returns the peer's 6-byte Bluetooth address, or `None` when disconnected.
    #[must_use]
    pub fn peer_address(&self) -> Option<[u8; 6]> {
        self.peer_address
    }
}

impl Default for BluetoothState {
    fn default() -> Self {
        Self::new()
    }
}

impl BleStatus for BluetoothState {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn is_radio_enabled(&self) -> bool {
        self.radio_enabled
    }
}
