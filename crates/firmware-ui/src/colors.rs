//! Watch colour palette (RGB565).

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::RgbColor;

/// Background.
pub const BLACK: Rgb565 = Rgb565::BLACK;
/// Default text.
pub const WHITE: Rgb565 = Rgb565::WHITE;
/// Title, selected stack glyph, low battery.
pub const ORANGE: Rgb565 = Rgb565::new(31, 44, 0);
/// Message box background, "muted" elements.
pub const BG_ALT: Rgb565 = Rgb565::new(7, 14, 7);
/// Answer button.
pub const HIGHLIGHT: Rgb565 = Rgb565::new(0, 44, 0);
/// Mute button, age label.
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(22, 44, 22);
/// Status bar timer.
pub const DIM_GRAY: Rgb565 = Rgb565::new(19, 38, 19);
/// Disconnected BLE icon.
pub const GRAY: Rgb565 = Rgb565::new(16, 32, 16);
/// Hang-up and "Dismiss All" buttons, critical battery.
pub const RED: Rgb565 = Rgb565::RED;
/// Connected BLE icon.
pub const BLUE: Rgb565 = Rgb565::BLUE;
