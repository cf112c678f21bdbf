//! Application UI layer for the notification screens and the status bar.
//!
//! This crate is `no_std` by default. Strings and lists are `heapless`.
//! Screens hold presentation state only. Drawing lives in `firmware-ui`,
//! hardware behind the `platform` traits.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

mod log;

pub mod config;
pub mod countdown;
pub mod dirty;
pub mod layout;
pub mod navigation;
pub mod notification_item;
pub mod notifications;
pub mod screen;
pub mod status_icons;

pub use config::{ConfigError, NotificationsConfig};
pub use navigation::Navigator;
pub use notification_item::{ItemButton, NotificationView};
pub use notifications::{Content, Controllers, Mode, Notifications, PresenterState};
pub use screen::{RefreshDirection, Screen, ScreenTask};
pub use status_icons::{BatteryIcon, BatteryLevel, StatusIcons};
