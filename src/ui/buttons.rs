//! GPIO button sampling.
//!
//! Six physical buttons, active-low with internal pull-up. The pins are
//! read once per UI tick and handed to [`ButtonPad`] for debouncing;
//! nothing here waits on edges.

use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_time::Instant;

use crate::ui::input::{Button, ButtonInput, ButtonPad, RawButtons};

/// Raw levels of the six button pins, indexed in [`Button::ALL`] order.
pub struct ButtonPins {
    pins: [Input<'static>; 6],
}

impl ButtonPins {
    /// Pins in the order SELECT, BACK, LEFT, RIGHT, UP, DOWN.
    pub fn new(pins: [AnyPin; 6]) -> Self {
        Self {
            pins: pins.map(|pin| Input::new(pin, Pull::Up)),
        }
    }
}

impl RawButtons for ButtonPins {
    fn is_down(&mut self, button: Button) -> bool {
        self.pins[button as usize].is_low()
    }
}

/// Debounced buttons sampled against the embassy clock.
pub struct Buttons {
    pad: ButtonPad<ButtonPins>,
}

impl Buttons {
    pub fn new(pins: ButtonPins) -> Self {
        Self {
            pad: ButtonPad::new(pins),
        }
    }

    /// Sample every pin; call once per tick before polling.
    pub fn sample(&mut self) {
        self.pad.sample(Instant::now().as_millis());
    }
}

impl ButtonInput for Buttons {
    fn poll_pressed(&mut self, button: Button) -> bool {
        self.pad.poll_pressed(button)
    }
}
