//! firmware-ui - Rendering Layer
//!
//! Draws the screen state held by the `ui` crate onto any
//! `DrawTarget<Color = Rgb565>`: the panel driver's framebuffer on target,
//! or [`Framebuffer`] in tests and on the desktop.
//!
//! Renderers are pure functions of the state they are given. They never
//! mutate screen state and return the target's error unchanged.

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod colors;
pub mod framebuffer;
pub mod notification;
pub mod status_icons;
pub mod styles;

pub use framebuffer::Framebuffer;
pub use notification::{draw_black, draw_countdown, draw_notification, draw_notifications};
pub use status_icons::draw_status_icons;
