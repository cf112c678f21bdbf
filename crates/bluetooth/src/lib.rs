//! Bluetooth-fed controllers: the notification store and the call responder.
//!
//! This crate is `no_std` by default; it only uses `core` + `heapless`.

#![cfg_attr(not(test), no_std)]

pub mod alert_notification;
pub mod notification_manager;
pub mod state;

pub use alert_notification::{AlertNotificationClient, CallResponse};
pub use notification_manager::NotificationManager;
pub use state::BluetoothState;
