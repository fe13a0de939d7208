//! nRF52840 wiring for the GPIO menu.

use embassy_nrf::gpio::{AnyPin, Flex, Level, OutputDrive, Pull};

use crate::actions::gpio::{PinBank, PIN_SLOTS};
use crate::error::Error;

/// The five user-accessible pins, driven as input/output so the GPIO
/// menu can both read and write them.
pub struct HeaderPins {
    pins: [Flex<'static>; PIN_SLOTS],
}

impl HeaderPins {
    /// Pins in the slot order of [`crate::config::GPIO_MONITOR_PINS`].
    pub fn new(pins: [AnyPin; PIN_SLOTS]) -> Self {
        Self {
            pins: pins.map(|pin| {
                let mut flex = Flex::new(pin);
                flex.set_as_input_output(Pull::Down, OutputDrive::Standard);
                flex
            }),
        }
    }
}

impl PinBank for HeaderPins {
    fn read(&mut self, slot: usize) -> Result<bool, Error> {
        Ok(self.pins[slot].is_high())
    }

    fn write(&mut self, slot: usize, high: bool) -> Result<(), Error> {
        self.pins[slot].set_level(if high { Level::High } else { Level::Low });
        Ok(())
    }
}
