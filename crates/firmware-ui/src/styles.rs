//! Pre-computed text styles.
//!
//! `MonoTextStyle::new` and `TextStyleBuilder` are const in embedded-graphics
//! 0.8, so every style used per frame lives in read-only data.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10, FONT_7X13};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};

use crate::colors::{DIM_GRAY, LIGHT_GRAY, ORANGE, WHITE};

/// Left aligned, positioned by the top edge.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Right aligned, positioned by the top edge.
pub const TOP_RIGHT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Top)
    .build();

/// Left aligned, positioned by the bottom edge.
pub const BOTTOM_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Bottom)
    .build();

/// Right aligned, positioned by the bottom edge.
pub const BOTTOM_RIGHT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Bottom)
    .build();

/// Centered both ways.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Notification title.
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, ORANGE);

/// `n/N` counter.
pub const COUNTER_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, WHITE);

/// Message body and button labels.
pub const BODY_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_7X13, WHITE);

/// Age label.
pub const AGE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, LIGHT_GRAY);

/// Status bar timer.
pub const TIMER_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_7X13, DIM_GRAY);

/// Stack glyphs, in a caller-chosen colour.
pub const GLYPH_FONT: &embedded_graphics::mono_font::MonoFont<'static> = &FONT_7X13;
