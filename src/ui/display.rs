//! SSD1306 128×64 panel behind [`GraphicsCanvas`].
//!
//! Frames are drawn into the driver's RAM buffer and pushed over I²C on
//! [`Present::present`].

use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use crate::error::Error;
use crate::ui::canvas::{GraphicsCanvas, Present};

/// Buffered SSD1306 driver on any blocking I²C bus.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

impl<I2C> Present for Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn present(&mut self) -> Result<(), Error> {
        self.flush().map_err(|_| Error::Display)
    }
}

/// Bring the panel up blank. Fails with [`Error::Display`] if the
/// controller does not answer.
pub fn init<I2C>(i2c: I2C) -> Result<GraphicsCanvas<Display<I2C>>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::Display)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)?;
    Ok(GraphicsCanvas::new(display))
}
