//! Drawing surface used by the screen renderers.
//!
//! [`Canvas`] is the narrow set of operations the menu screens need
//! (frames, text, text measurement). [`GraphicsCanvas`] implements it
//! on top of any monochrome `embedded-graphics` draw target, which is
//! how the SSD1306 frame buffer is driven on the device.

use embedded_graphics::mono_font::ascii::{FONT_4X6, FONT_6X10, FONT_6X12, FONT_9X15};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::error::Error;

/// Fonts the screens switch between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// Title bars, chevrons, list cursor.
    Tiny,
    /// Menu list rows and action status screens.
    List,
    /// Function screen context glyph.
    Status,
    /// Main menu icon and category label.
    Headline,
}

impl Font {
    fn mono(self) -> &'static MonoFont<'static> {
        match self {
            Font::Tiny => &FONT_4X6,
            Font::List => &FONT_6X10,
            Font::Status => &FONT_6X12,
            Font::Headline => &FONT_9X15,
        }
    }
}

/// Minimal drawing interface over a 128×64 monochrome surface.
///
/// Text coordinates name the left end of the baseline.
pub trait Canvas {
    type Error;

    /// Blank the back buffer.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Push the back buffer to the panel.
    fn present(&mut self) -> Result<(), Self::Error>;

    /// One-pixel outline rectangle with rounded corners.
    fn draw_frame(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        radius: i32,
    ) -> Result<(), Self::Error>;

    fn set_font(&mut self, font: Font);

    fn draw_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), Self::Error>;

    /// Width in pixels of `text` in the current font.
    fn text_width(&self, text: &str) -> i32;
}

/// Hook for buffered targets that need an explicit flush.
pub trait Present {
    fn present(&mut self) -> Result<(), Error>;
}

/// [`Canvas`] over an `embedded-graphics` draw target.
pub struct GraphicsCanvas<D> {
    target: D,
    font: Font,
}

impl<D> GraphicsCanvas<D>
where
    D: DrawTarget<Color = BinaryColor> + Present,
{
    pub fn new(target: D) -> Self {
        Self {
            target,
            font: Font::Tiny,
        }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }
}

impl<D> Canvas for GraphicsCanvas<D>
where
    D: DrawTarget<Color = BinaryColor> + Present,
{
    type Error = Error;

    fn clear(&mut self) -> Result<(), Error> {
        self.target
            .clear(BinaryColor::Off)
            .map_err(|_| Error::Display)
    }

    fn present(&mut self) -> Result<(), Error> {
        self.target.present()
    }

    fn draw_frame(
        &mut self,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        radius: i32,
    ) -> Result<(), Error> {
        let rect = Rectangle::new(
            Point::new(x, y),
            Size::new(width.max(0) as u32, height.max(0) as u32),
        );
        let radius = radius.max(0) as u32;
        RoundedRectangle::with_equal_corners(rect, Size::new(radius, radius))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut self.target)
            .map_err(|_| Error::Display)
    }

    fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) -> Result<(), Error> {
        let style = MonoTextStyle::new(self.font.mono(), BinaryColor::On);
        Text::with_baseline(text, Point::new(x, y), style, Baseline::Alphabetic)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| Error::Display)
    }

    fn text_width(&self, text: &str) -> i32 {
        let font = self.font.mono();
        let glyphs = text.chars().count() as i32;
        if glyphs == 0 {
            return 0;
        }
        let advance = (font.character_size.width + font.character_spacing) as i32;
        glyphs * advance - font.character_spacing as i32
    }
}
