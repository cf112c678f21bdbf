//! In-memory RGB565 framebuffer.
//!
//! The display task draws into one of these and hands the pixels to the
//! panel driver for flushing. Tests use it to inspect rendered pixels.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Renderer writing into a borrowed, row-major pixel slice.
///
/// Pixels outside the slice are dropped silently.
pub struct Framebuffer<'a> {
    pixels: &'a mut [Rgb565],
    width: u32,
    height: u32,
}

impl<'a> Framebuffer<'a> {
    /// Wrap `pixels` as a `width` × `height` image.
    ///
    /// A slice shorter than `width * height` simply clips the bottom rows.
    pub fn new(pixels: &'a mut [Rgb565], width: u32, height: u32) -> Self {
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Colour at `point`, if inside the buffer.
    #[must_use]
    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        self.index(point).and_then(|idx| self.pixels.get(idx)).copied()
    }

    /// Number of pixels inside `area` with `color`.
    #[must_use]
    pub fn count_in(&self, area: &Rectangle, color: Rgb565) -> usize {
        area.points()
            .filter(|p| self.pixel(*p) == Some(color))
            .count()
    }

    fn index(&self, point: Point) -> Option<usize> {
        let x = u32::try_from(point.x).ok()?;
        let y = u32::try_from(point.y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y.checked_mul(self.width)?.checked_add(x)?;
        usize::try_from(idx).ok()
    }
}

impl OriginDimensions for Framebuffer<'_> {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Framebuffer<'_> {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(slot) = self.index(point).and_then(|idx| self.pixels.get_mut(idx)) {
                *slot = color;
            }
        }
        Ok(())
    }
}
