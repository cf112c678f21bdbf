//! Status bar renderer: timer at top-centre, BLE / plug / battery at
//! top-right.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use ui::layout::SCREEN_WIDTH;
use ui::status_icons::BATTERY_JUICE_MAX_HEIGHT;
use ui::{BatteryLevel, StatusIcons};

use crate::colors::{BLUE, DIM_GRAY, GRAY, ORANGE, RED, WHITE};
use crate::styles::{GLYPH_FONT, TIMER_STYLE, TOP_LEFT, TOP_RIGHT};

/// Battery outline, flush with the top-right corner.
pub const BATTERY_OUTLINE: Rectangle = Rectangle::new(
    Point::new(SCREEN_WIDTH - 13, 0),
    Size::new(13, BATTERY_JUICE_MAX_HEIGHT + 4),
);

/// Right edge of the plug glyph.
const PLUG_RIGHT: i32 = SCREEN_WIDTH - 18;
/// Right edge of the BLE glyph.
const BLE_RIGHT: i32 = SCREEN_WIDTH - 30;
/// Hourglass glyph, left of centre.
const TIMER_ICON_POS: Point = Point::new(SCREEN_WIDTH / 2 - 32, 0);
/// Remaining time text, right of centre.
const TIMER_TEXT_POS: Point = Point::new(SCREEN_WIDTH / 2 - 10, 0);

/// Draw the status icons over whatever is below them.
pub fn draw_status_icons<D>(icons: &StatusIcons, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    if let Some(text) = icons.timer_text() {
        Text::with_text_style(
            "T",
            TIMER_ICON_POS,
            MonoTextStyle::new(GLYPH_FONT, DIM_GRAY),
            TOP_LEFT,
        )
        .draw(target)?;
        Text::with_text_style(text, TIMER_TEXT_POS, TIMER_STYLE, TOP_LEFT).draw(target)?;
    }

    if icons.ble_visible() {
        let color = if icons.ble_connected() { BLUE } else { GRAY };
        Text::with_text_style(
            "B",
            Point::new(BLE_RIGHT, 0),
            MonoTextStyle::new(GLYPH_FONT, color),
            TOP_RIGHT,
        )
        .draw(target)?;
    }

    if icons.plug_visible() {
        Text::with_text_style(
            "+",
            Point::new(PLUG_RIGHT, 0),
            MonoTextStyle::new(GLYPH_FONT, WHITE),
            TOP_RIGHT,
        )
        .draw(target)?;
    }

    draw_battery(icons, target)
}

fn draw_battery<D>(icons: &StatusIcons, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let battery = icons.battery();
    let color = match battery.level() {
        BatteryLevel::Normal => WHITE,
        BatteryLevel::Low => ORANGE,
        BatteryLevel::Critical => RED,
    };
    BATTERY_OUTLINE
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(target)?;

    let juice = battery.juice_height();
    let empty = i32::try_from(BATTERY_JUICE_MAX_HEIGHT.saturating_sub(juice)).unwrap_or(0);
    let inner = BATTERY_OUTLINE.offset(-2);
    Rectangle::new(
        Point::new(inner.top_left.x, inner.top_left.y.saturating_add(empty)),
        Size::new(inner.size.width, juice),
    )
    .into_styled(PrimitiveStyle::with_fill(color))
    .draw(target)
}
