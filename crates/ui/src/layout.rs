//! Fixed widget geometry for the 240×240 panel.
//!
//! Screens decide *what* is visible; the renderer and touch hit-testing both
//! read positions from here so they cannot drift apart.

use embedded_graphics::geometry::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use platform::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Panel width in pixels as a signed coordinate.
#[allow(clippy::cast_possible_wrap)] // 240 fits in i32
pub const SCREEN_WIDTH: i32 = DISPLAY_WIDTH as i32;

/// Panel height in pixels as a signed coordinate.
#[allow(clippy::cast_possible_wrap)] // 240 fits in i32
pub const SCREEN_HEIGHT: i32 = DISPLAY_HEIGHT as i32;

/// Baseline row of the title and the `n/N` counter.
pub const HEADER_Y: i32 = 8;

/// Width the title may scroll within.
pub const TITLE_WIDTH: u32 = 180;

/// Top of the grey message box.
pub const SUBJECT_Y: i32 = 37;

/// Inner padding of the message box.
pub const SUBJECT_PADDING: u32 = 10;

/// Height of the message box for ordinary notifications.
pub const SUBJECT_HEIGHT: u32 = DISPLAY_HEIGHT - 66;

/// Height of the message box when the call buttons are shown.
pub const SUBJECT_HEIGHT_CALL: u32 = 108;

/// Horizontal spacing of the notification stack glyphs (right to left).
pub const STACK_SPACING: i32 = 25;

/// Side of the square "Dismiss All" button.
pub const CLEAR_BUTTON_SIZE: u32 = 100;

/// Content is pushed left by this much while "Dismiss All" is visible.
#[allow(clippy::cast_possible_wrap)] // 100 fits in i32
pub const CLEAR_BUTTON_SHIFT: i32 = -(CLEAR_BUTTON_SIZE as i32);

/// Side of the square call buttons.
pub const CALL_BUTTON_SIZE: u32 = 76;

/// Thickness of the preview countdown line.
pub const COUNTDOWN_LINE_WIDTH: u32 = 3;

/// "Dismiss All" button, right-middle of the screen.
#[must_use]
#[allow(clippy::cast_possible_wrap)] // small panel constants
pub const fn clear_button() -> Rectangle {
    Rectangle::new(
        Point::new(
            SCREEN_WIDTH - CLEAR_BUTTON_SIZE as i32,
            (SCREEN_HEIGHT - CLEAR_BUTTON_SIZE as i32) / 2,
        ),
        Size::new(CLEAR_BUTTON_SIZE, CLEAR_BUTTON_SIZE),
    )
}

/// Answer button, bottom-left.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub const fn accept_button() -> Rectangle {
    Rectangle::new(
        Point::new(0, SCREEN_HEIGHT - CALL_BUTTON_SIZE as i32),
        Size::new(CALL_BUTTON_SIZE, CALL_BUTTON_SIZE),
    )
}

/// Hang-up button, bottom-middle.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub const fn reject_button() -> Rectangle {
    Rectangle::new(
        Point::new(
            (SCREEN_WIDTH - CALL_BUTTON_SIZE as i32) / 2,
            SCREEN_HEIGHT - CALL_BUTTON_SIZE as i32,
        ),
        Size::new(CALL_BUTTON_SIZE, CALL_BUTTON_SIZE),
    )
}

/// Mute button, bottom-right.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub const fn mute_button() -> Rectangle {
    Rectangle::new(
        Point::new(
            SCREEN_WIDTH - CALL_BUTTON_SIZE as i32,
            SCREEN_HEIGHT - CALL_BUTTON_SIZE as i32,
        ),
        Size::new(CALL_BUTTON_SIZE, CALL_BUTTON_SIZE),
    )
}
