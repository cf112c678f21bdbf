//! Hardware Abstraction Layer (HAL) for the Wristlet smartwatch
//!
//! This crate provides trait-based abstractions for every controller the
//! screens talk to, enabling development and testing without the watch.
//!
//! # Architecture Layers
//!
//! ```text
//! Screens (ui) / Renderers (firmware-ui)
//!         ↓
//! Feature Layers (bluetooth: notification store, call responder)
//!         ↓
//! Platform HAL (this crate - trait abstractions)
//!         ↓
//! Controllers (motor, system task, BLE stack, RTC)
//! ```
//!
//! # Abstractions
//!
//! - [`NotificationStore`] - Received notifications, newest first
//! - [`Haptics`] - Vibration motor
//! - [`SleepInhibitor`] - Display sleep toggle
//! - [`CallControl`] - Answer / hang up / mute the phone
//! - [`BleStatus`], [`PowerMonitor`], [`CountdownTimer`] - Status signals
//! - [`WallClock`] - Calendar time
//! - [`InputDevice`] - Touch panel gestures
//!
//! # Features
//!
//! - `std`: Enable the [`mocks`] module outside of this crate's tests
//! - `defmt`: Derive `defmt::Format` on the small enums

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(clippy::unreachable)] // no unreachable!() that isn't documented
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)] // unsafe fn body is not implicitly unsafe block
#![warn(clippy::print_stdout)] // prefer tracing/defmt over println! in lib code
#![allow(clippy::must_use_candidate)] // controller accessors, callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(async_fn_in_trait)] // Embassy no_std: single-threaded, Send bounds not needed

pub mod bluetooth;
pub mod clock;
pub mod config;
pub mod haptics;
pub mod input;
pub mod notification;
pub mod power;

#[cfg(any(test, feature = "std"))]
pub mod mocks;

// Re-export main high-level traits
pub use bluetooth::{BleStatus, CallControl};
pub use clock::{CountdownTimer, WallClock};
pub use haptics::Haptics;
pub use input::{InputDevice, TouchEvent};
pub use notification::{
    Category, Notification, NotificationId, NotificationStore, MAX_NOTIFICATIONS, MESSAGE_SIZE,
};
pub use power::{PowerMonitor, SleepGate, SleepInhibitor};
