//! Notification screen renderer.

use embassy_time::Instant;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;
use embedded_text::TextBox;
use ui::layout::{
    accept_button, clear_button, mute_button, reject_button, COUNTDOWN_LINE_WIDTH, HEADER_Y,
    SCREEN_HEIGHT, SCREEN_WIDTH, STACK_SPACING, SUBJECT_HEIGHT, SUBJECT_HEIGHT_CALL,
    SUBJECT_PADDING, SUBJECT_Y, TITLE_WIDTH,
};
use ui::notification_item::{CALL_SUBJECT, DISMISS_ALL_LABEL};
use ui::{Content, NotificationView, Notifications};

use crate::colors::{BG_ALT, BLACK, HIGHLIGHT, LIGHT_GRAY, ORANGE, RED, WHITE};
use crate::styles::{
    AGE_STYLE, BODY_STYLE, BOTTOM_LEFT, BOTTOM_RIGHT, CENTERED, COUNTER_STYLE, GLYPH_FONT,
    TITLE_STYLE, TOP_LEFT, TOP_RIGHT,
};

const BLACK_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BLACK);
const SUBJECT_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BG_ALT);
const CLEAR_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(RED);
const COUNTDOWN_STROKE: PrimitiveStyle<Rgb565> =
    PrimitiveStyle::with_stroke(WHITE, COUNTDOWN_LINE_WIDTH);

/// Distance of the stack glyphs and the age label from the screen edges.
const FOOTER_INSET: i32 = 5;
/// Bottom edge of the footer text.
const FOOTER_BOTTOM: i32 = SCREEN_HEIGHT - 3;
/// Row of the countdown line.
const COUNTDOWN_Y: i32 = 1;

/// Draw whatever the notification screen currently shows, plus the preview
/// countdown line at `now`.
pub fn draw_notifications<D>(
    screen: &Notifications<'_>,
    now: Instant,
    target: &mut D,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    match screen.content() {
        Content::Item(view) => draw_notification(view, target)?,
        Content::Black => draw_black(target)?,
    }
    if let Some(extent) = screen.countdown_extent(now) {
        draw_countdown(extent, target)?;
    }
    Ok(())
}

/// Full-screen black box of the dismiss transition.
pub fn draw_black<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    full_screen().into_styled(BLACK_FILL).draw(target)
}

/// Preview countdown line, `extent` pixels long from the left edge.
pub fn draw_countdown<D>(extent: i64, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let Ok(end) = i32::try_from(extent.min(i64::from(SCREEN_WIDTH))) else {
        return Ok(());
    };
    if end <= 0 {
        return Ok(());
    }
    Line::new(Point::new(0, COUNTDOWN_Y), Point::new(end, COUNTDOWN_Y))
        .into_styled(COUNTDOWN_STROKE)
        .draw(target)
}

/// One notification (or the placeholder).
pub fn draw_notification<D>(view: &NotificationView, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    full_screen().into_styled(BLACK_FILL).draw(target)?;

    {
        let mut content = target.translated(Point::new(view.content_offset(), 0));
        draw_header(view, &mut content)?;
        draw_subject(view, &mut content)?;
        if view.is_call() {
            draw_call_buttons(&mut content)?;
        } else {
            draw_stack(view, &mut content)?;
        }
        if let Some(age) = view.age() {
            Text::with_text_style(
                age,
                Point::new(FOOTER_INSET, FOOTER_BOTTOM),
                AGE_STYLE,
                BOTTOM_LEFT,
            )
            .draw(&mut content)?;
        }
    }

    if view.clear_button_visible() {
        let button = clear_button();
        button.into_styled(CLEAR_FILL).draw(target)?;
        Text::with_text_style(DISMISS_ALL_LABEL, button.center(), BODY_STYLE, CENTERED)
            .draw(target)?;
    }
    Ok(())
}

fn draw_header<D>(view: &NotificationView, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let title_area = Rectangle::new(
        Point::new(0, HEADER_Y),
        Size::new(TITLE_WIDTH, TITLE_STYLE.font.character_size.height),
    );
    Text::with_text_style(view.title(), title_area.top_left, TITLE_STYLE, TOP_LEFT)
        .draw(&mut target.clipped(&title_area))?;

    let counter = view.counter();
    Text::with_text_style(
        &counter,
        Point::new(SCREEN_WIDTH.saturating_sub(1), HEADER_Y),
        COUNTER_STYLE,
        TOP_RIGHT,
    )
    .draw(target)?;
    Ok(())
}

fn draw_subject<D>(view: &NotificationView, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let height = if view.is_call() {
        SUBJECT_HEIGHT_CALL
    } else {
        SUBJECT_HEIGHT
    };
    let area = Rectangle::new(
        Point::new(0, SUBJECT_Y),
        Size::new(full_screen().size.width, height),
    );
    area.into_styled(SUBJECT_FILL).draw(target)?;

    let inner = area.offset(-padding());
    if view.is_call() {
        Text::with_text_style(CALL_SUBJECT, inner.top_left, BODY_STYLE, TOP_LEFT)
            .draw(target)?;
        let line = i32::try_from(BODY_STYLE.font.character_size.height).unwrap_or(0);
        let caller = Rectangle::new(
            Point::new(inner.top_left.x, inner.top_left.y.saturating_add(line)),
            Size::new(
                inner.size.width,
                inner.size.height.saturating_sub(BODY_STYLE.font.character_size.height),
            ),
        );
        TextBox::new(view.message(), caller, BODY_STYLE).draw(target)?;
    } else {
        TextBox::new(view.message(), inner, BODY_STYLE).draw(target)?;
    }
    Ok(())
}

fn draw_stack<D>(view: &NotificationView, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut right = SCREEN_WIDTH.saturating_sub(FOOTER_INSET);
    for (idx, category) in view.stack().iter().enumerate() {
        let color = if view.is_selected(idx) { ORANGE } else { WHITE };
        Text::with_text_style(
            category.glyph(),
            Point::new(right, FOOTER_BOTTOM),
            MonoTextStyle::new(GLYPH_FONT, color),
            BOTTOM_RIGHT,
        )
        .draw(target)?;
        right = right.saturating_sub(STACK_SPACING);
    }
    Ok(())
}

fn draw_call_buttons<D>(target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    for (area, color, label) in [
        (accept_button(), HIGHLIGHT, "Answer"),
        (reject_button(), RED, "Hang up"),
        (mute_button(), LIGHT_GRAY, "Mute"),
    ] {
        area.into_styled(PrimitiveStyle::with_fill(color)).draw(target)?;
        Text::with_text_style(label, area.center(), BODY_STYLE, CENTERED).draw(target)?;
    }
    Ok(())
}

fn full_screen() -> Rectangle {
    Rectangle::new(
        Point::zero(),
        Size::new(SCREEN_WIDTH.unsigned_abs(), SCREEN_HEIGHT.unsigned_abs()),
    )
}

fn padding() -> i32 {
    i32::try_from(SUBJECT_PADDING).unwrap_or(0)
}
