//! Application configuration and constants
//!
//! Central values shared by the UI layers. Screens and renderers reference
//! these rather than hardcoding the panel geometry.

/// Horizontal resolution of the round-cornered LCD panel.
pub const DISPLAY_WIDTH: u32 = 240;

/// Vertical resolution of the panel.
pub const DISPLAY_HEIGHT: u32 = 240;

/// Display refresh period; screens are refreshed once per period.
pub const REFRESH_PERIOD_MS: u64 = 20;
